mod common;

use common::{ADMIN_TOKEN, MockApi, USER_TOKEN};
use shared::api::{ApiError, ProductListQuery, ProductSortKey};
use shared::models::{LoginRequest, RegisterRequest, Role};

#[tokio::test]
async fn login_accepts_plain_and_quoted_tokens() {
    let api = MockApi::start().await;
    let client = api.client();

    let admin = client
        .login(&LoginRequest {
            email: "admin@example.com".to_string(),
            password: common::PASSWORD.to_string(),
        })
        .await
        .unwrap();
    let user = client
        .login(&LoginRequest {
            email: "user@example.com".to_string(),
            password: common::PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(admin.as_deref(), Some(common::ADMIN_TOKEN));
    assert_eq!(user.as_deref(), Some(USER_TOKEN));
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() {
    let api = MockApi::start().await;
    let err = api
        .client()
        .login(&LoginRequest {
            email: "user@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Token inválido".to_string()
        }
    );
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn protected_calls_without_token_send_nothing() {
    let api = MockApi::start().await;
    let client = api.client();

    assert_eq!(client.me().await.unwrap_err(), ApiError::Unauthenticated);
    assert_eq!(client.my_stores().await.unwrap_err(), ApiError::Unauthenticated);
    assert_eq!(client.list_users().await.unwrap_err(), ApiError::Unauthenticated);
    assert_eq!(client.delete_store(1).await.unwrap_err(), ApiError::Unauthenticated);
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let api = MockApi::start().await;
    let me = api.client().with_token(Some(USER_TOKEN)).me().await.unwrap();

    assert_eq!(me.email, "user@example.com");
    assert_eq!(me.role, Some(Role::User));
}

#[tokio::test]
async fn non_admin_gets_plain_text_forbidden_message() {
    let api = MockApi::start().await;
    let err = api
        .client()
        .with_token(Some(USER_TOKEN))
        .list_users()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Acesso negado");
}

#[tokio::test]
async fn empty_error_body_uses_status_reason() {
    let api = MockApi::start().await;
    let err = api.client().get_public_store(500).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "Internal Server Error".to_string()
        }
    );
}

#[tokio::test]
async fn find_store_uses_public_endpoint_when_anonymous() {
    let api = MockApi::start().await;
    let store = api.client().find_store(1).await.unwrap();

    assert_eq!(store.name, "Padaria");
    assert_eq!(store.products.len(), 1);
    assert_eq!(api.requests(), vec!["GET /api/store/public/1"]);
}

#[tokio::test]
async fn product_listing_sends_query() {
    let api = MockApi::start().await;
    let query = ProductListQuery {
        search: Some("pão".to_string()),
        sort: Some(ProductSortKey::PriceDesc),
        tags: vec!["doce".to_string(), "salgado".to_string()],
    };
    let products = api.client().list_products(&query).await.unwrap();

    assert_eq!(products.len(), 2);
    assert!(products[1].has_discount());
    assert_eq!(
        api.requests(),
        vec!["GET /api/products?search=p%C3%A3o&sortBy=price_desc&tags=doce&tags=salgado"]
    );
}

#[tokio::test]
async fn register_posts_camel_case_body() {
    let api = MockApi::start().await;
    let user = api
        .client()
        .register(&RegisterRequest {
            email: "new@example.com".to_string(),
            password: "pw".to_string(),
            name: "Nina".to_string(),
            last_name: "Nova".to_string(),
            cpf: "222".to_string(),
            phone: String::new(),
            role: Role::User,
        })
        .await
        .unwrap();

    assert_eq!(user.id, 42);
    assert_eq!(user.last_name, "Nova");
    assert_eq!(user.role, Some(Role::User));
}

#[tokio::test]
async fn average_rating_and_tags() {
    let api = MockApi::start().await;
    let client = api.client();

    let average = client.average_rating(10).await.unwrap();
    let tags = client.all_tags().await.unwrap();

    assert!((average - 3.75).abs() < f64::EPSILON);
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].tag_name, "doce");
}

#[tokio::test]
async fn average_of_unrated_product_is_zero() {
    let api = MockApi::start().await;

    let average = api.client().average_rating(12).await.unwrap();

    assert!(average.abs() < f64::EPSILON);
    assert_eq!(api.requests(), vec!["GET /api/products/12/rating/average"]);
}

#[tokio::test]
async fn listings_tolerate_null_columns() {
    let api = MockApi::start().await;
    let client = api.client();

    let stores = client.list_public_stores().await.unwrap();
    assert_eq!(stores.len(), 2);
    assert_eq!(stores[1].name, "Mercado");
    assert!(stores[1].address.is_empty());
    assert!(stores[1].description.is_empty());

    let products = client.list_products(&ProductListQuery::default()).await.unwrap();
    assert!(products[0].description.is_empty());
    assert!(products[0].quantity.is_none());
    assert_eq!(products[1].store_name.as_deref(), Some("Padaria"));

    let store = client.get_public_store(1).await.unwrap();
    assert!(store.contact.is_empty());
    assert!(store.products[0].description.is_empty());

    let users = client.with_token(Some(ADMIN_TOKEN)).list_users().await.unwrap();
    assert!(users[1].last_name.is_empty());
    assert_eq!(users[1].full_name(), "Ulisses");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = shared::api::ApiClient::new(&shared::config::ApiConfig::new("http://127.0.0.1:9/api"));
    let err = client.list_public_stores().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}
