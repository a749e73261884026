//! In-process mock of the marketplace REST API.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::api::ApiClient;
use shared::config::ApiConfig;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const USER_TOKEN: &str = "user-token";
pub const PASSWORD: &str = "secret";

#[derive(Clone, Default)]
pub struct MockState {
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// A running mock API.
pub struct MockApi {
    addr: SocketAddr,
    state: MockState,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState::default();
        let api = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/register", post(register))
            .route("/users/me", get(me))
            .route("/users", get(users))
            .route("/store/public", get(public_stores))
            .route("/store/my", get(my_stores))
            .route("/store/{id}", delete(delete_store))
            .route("/products", get(products))
            .route("/products/store/{id}", post(create_product))
            .route("/products/{id}/rating", post(rate))
            .route("/products/{id}/rating/average", get(average))
            .route("/tags/all", get(tags))
            .route("/tags/product/{id}", post(create_tag))
            .route("/comments/product/{id}", post(create_comment))
            .route("/store/public/{id}", get(public_store));
        let app = Router::new()
            .nest("/api", api)
            .layer(middleware::from_fn_with_state(state.clone(), record))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig::new(self.base_url()))
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// `METHOD /path?query` of every request, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn record(State(state): State<MockState>, request: Request, next: Next) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .requests
        .lock()
        .unwrap()
        .push(format!("{} {}", request.method(), request.uri()));
    next.run(request).await
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status": 401, "error": "Unauthorized", "message": "Token inválido"})),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    if body["password"] != PASSWORD {
        return unauthorized();
    }
    match email {
        "admin@example.com" => ADMIN_TOKEN.into_response(),
        "user@example.com" => format!("\"{USER_TOKEN}\"").into_response(),
        "tokenless@example.com" => StatusCode::OK.into_response(),
        _ => unauthorized(),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 42,
            "email": body["email"],
            "name": body["name"],
            "lastName": body["lastName"],
            "cpf": body["cpf"],
            "role": body["role"],
        })),
    )
        .into_response()
}

async fn me(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(ADMIN_TOKEN) => Json(json!({
            "id": 1, "email": "admin@example.com", "name": "Ada", "lastName": "Admin",
            "cpf": "000", "role": "ADMIN"
        }))
        .into_response(),
        Some(USER_TOKEN) => Json(json!({
            "id": 2, "email": "user@example.com", "name": "Ulisses", "lastName": "User",
            "cpf": "111", "role": "USER"
        }))
        .into_response(),
        _ => unauthorized(),
    }
}

async fn users(headers: HeaderMap) -> Response {
    if bearer(&headers) != Some(ADMIN_TOKEN) {
        return (StatusCode::FORBIDDEN, "Acesso negado").into_response();
    }
    Json(json!([
        {"id": 1, "email": "admin@example.com", "name": "Ada", "lastName": "Admin",
         "cpf": "000", "phone": null, "role": "ADMIN"},
        {"id": 2, "email": "user@example.com", "name": "Ulisses", "lastName": null,
         "cpf": null, "phone": null, "role": "USER"}
    ]))
    .into_response()
}

async fn public_stores() -> Json<Value> {
    Json(json!([
        {"id": 1, "name": "Padaria", "address": "Rua A", "contact": "1111", "imageUrl": null,
         "description": "Pães e doces", "ownerId": 2, "ownerEmail": "user@example.com"},
        {"id": 2, "name": "Mercado", "address": null, "contact": null, "imageUrl": null,
         "description": null, "ownerId": 3, "ownerEmail": "other@example.com"}
    ]))
}

async fn my_stores(headers: HeaderMap) -> Response {
    if bearer(&headers).is_none() {
        return unauthorized();
    }
    Json(json!([{
        "id": 1, "name": "Padaria", "address": "Rua A", "contact": null, "imageUrl": null,
        "description": null, "ownerId": 2, "ownerEmail": "user@example.com"
    }]))
    .into_response()
}

async fn delete_store(Path(id): Path<i64>, headers: HeaderMap) -> Response {
    match (bearer(&headers), id) {
        (None, _) => unauthorized(),
        (Some(_), 404) => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "error": "Not Found", "message": "Loja não encontrada"})),
        )
            .into_response(),
        (Some(_), _) => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn products() -> Json<Value> {
    Json(json!([
        {"id": 10, "name": "Pão", "price": 4.5, "quantity": null, "description": null,
         "imageUrl": null, "discount": null, "createdAt": "01/01/2025 08:00:00",
         "storeId": 1, "storeName": null},
        {"id": 11, "name": "Bolo", "price": 30.0, "quantity": 3, "description": "Chocolate",
         "imageUrl": null, "discount": 10.0, "createdAt": "02/01/2025 08:00:00",
         "storeId": 1, "storeName": "Padaria"}
    ]))
}

async fn create_product(Path(store_id): Path<i64>, Json(body): Json<Value>) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 99, "name": body["name"], "price": body["price"],
            "description": body["description"], "storeId": store_id
        })),
    )
        .into_response()
}

async fn rate(Path(_id): Path<i64>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if bearer(&headers).is_none() {
        return unauthorized();
    }
    let rating = body["rating"].as_f64().unwrap_or_default();
    Json(json!({"averageRating": (rating + 4.0) / 2.0, "rating": rating})).into_response()
}

/// Bare `Double`, `null` when the product has no ratings.
async fn average(Path(id): Path<i64>) -> Json<Value> {
    if id == 12 {
        Json(Value::Null)
    } else {
        Json(json!(3.75))
    }
}

async fn tags() -> Json<Value> {
    Json(json!([
        {"id": 1, "productId": 10, "tagName": "salgado"},
        {"id": 2, "productId": 11, "tagName": "doce"}
    ]))
}

async fn create_tag(Path(product_id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"id": 7, "productId": product_id, "tagName": body["tagName"]}))
}

async fn create_comment(Path(product_id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "id": 5, "productId": product_id, "userId": 2, "userName": "Ulisses",
        "comment": body["comment"], "createdAt": "2025-01-01 10:00:00"
    }))
}

async fn public_store(Path(id): Path<i64>) -> Response {
    if id == 1 {
        Json(json!({
            "id": 1, "name": "Padaria", "address": "Rua A", "contact": null, "imageUrl": null,
            "description": null, "ownerId": 2, "ownerEmail": "user@example.com",
            "products": [{"id": 10, "name": "Pão", "price": 4.5, "description": null,
                          "quantity": null, "imageUrl": null, "storeName": null}]
        }))
        .into_response()
    } else {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
