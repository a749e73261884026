mod common;

use common::{MockApi, PASSWORD, USER_TOKEN};
use shared::access::{Access, Landing};
use shared::actions::{self, ActionError};
use shared::forms::{FormError, ProductForm};
use shared::models::{LoginRequest, Role, Session, Store};
use shared::session::{MemorySessionStore, SessionStore};

fn credentials(email: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: PASSWORD.to_string(),
    }
}

fn user_session() -> Session {
    Session {
        email: Some("user@example.com".to_string()),
        role: Some(Role::User),
        token: Some(USER_TOKEN.to_string()),
    }
}

#[tokio::test]
async fn login_stores_token_and_lands_by_role() {
    let api = MockApi::start().await;
    let store = MemorySessionStore::new();

    let (session, landing) = actions::login(&api.client(), &store, &credentials("admin@example.com"))
        .await
        .unwrap();
    assert_eq!(landing, Landing::AdminDashboard);
    assert_eq!(landing.path(), "/admin");
    assert_eq!(session.token(), Some(common::ADMIN_TOKEN));
    assert_eq!(store.load(), Some(session));

    let (session, landing) = actions::login(&api.client(), &store, &credentials("user@example.com"))
        .await
        .unwrap();
    assert_eq!(landing, Landing::UserDashboard);
    assert_eq!(session.role, Some(Role::User));
    assert_eq!(store.load().and_then(|s| s.token), Some(USER_TOKEN.to_string()));
    assert_eq!(
        api.requests(),
        vec![
            "POST /api/auth/login",
            "GET /api/users/me",
            "POST /api/auth/login",
            "GET /api/users/me"
        ]
    );
}

#[tokio::test]
async fn login_without_token_in_response_fails() {
    let api = MockApi::start().await;
    let store = MemorySessionStore::new();

    let err = actions::login(&api.client(), &store, &credentials("tokenless@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err, ActionError::MissingToken);
    assert!(store.load().is_none());
    assert_eq!(api.hits(), 1);
}

#[tokio::test]
async fn anonymous_admin_route_redirects_to_login() {
    let store = MemorySessionStore::new();
    assert_eq!(
        Access::check(store.load().as_ref(), Some(Role::Admin)),
        Access::RedirectToLogin
    );
}

#[tokio::test]
async fn non_numeric_price_issues_no_request() {
    let api = MockApi::start().await;
    let client = api.client().with_token(Some(USER_TOKEN));
    let form = ProductForm {
        name: "Bolo".to_string(),
        price: "abc".to_string(),
        ..Default::default()
    };

    let err = actions::create_product(&client, "1", &form).await.unwrap_err();

    assert_eq!(err, ActionError::Validation(FormError::InvalidPrice));
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn valid_product_is_created() {
    let api = MockApi::start().await;
    let client = api.client().with_token(Some(USER_TOKEN));
    let form = ProductForm {
        name: "Bolo".to_string(),
        price: "30".to_string(),
        ..Default::default()
    };

    let product = actions::create_product(&client, "1", &form).await.unwrap();

    assert_eq!(product.id, 99);
    assert_eq!(product.store_id, Some(1));
    assert_eq!(api.requests(), vec!["POST /api/products/store/1"]);
}

#[tokio::test]
async fn confirmed_store_delete_removes_it_from_list() {
    let api = MockApi::start().await;
    let client = api.client().with_token(Some(USER_TOKEN));
    let mut stores = client.list_public_stores().await.unwrap();
    assert_eq!(stores.len(), 2);

    let deleted = actions::delete_store(&client, &mut stores, 1, || true).await;

    assert_eq!(deleted, Ok(true));
    assert_eq!(stores.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
    assert_eq!(api.requests().last().map(String::as_str), Some("DELETE /api/store/1"));
}

#[tokio::test]
async fn declined_store_delete_sends_nothing() {
    let api = MockApi::start().await;
    let client = api.client().with_token(Some(USER_TOKEN));
    let mut stores = vec![Store {
        id: 1,
        ..Default::default()
    }];

    let deleted = actions::delete_store(&client, &mut stores, 1, || false).await;

    assert_eq!(deleted, Ok(false));
    assert_eq!(stores.len(), 1);
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn failed_store_delete_keeps_list() {
    let api = MockApi::start().await;
    let client = api.client().with_token(Some(USER_TOKEN));
    let mut stores = vec![Store {
        id: 404,
        ..Default::default()
    }];

    let err = actions::delete_store(&client, &mut stores, 404, || true)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Loja não encontrada");
    assert_eq!(stores.len(), 1);
}

#[tokio::test]
async fn rating_without_session_requires_login_and_sends_nothing() {
    let api = MockApi::start().await;

    let result = actions::rate_product(&api.client(), None, 10, 5).await;
    assert_eq!(result, Err(ActionError::LoginRequired));

    let tokenless = Session {
        token: None,
        ..user_session()
    };
    let result = actions::rate_product(&api.client(), Some(&tokenless), 10, 5).await;
    assert_eq!(result, Err(ActionError::LoginRequired));
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn rating_with_session_returns_new_average() {
    let api = MockApi::start().await;

    let average = actions::rate_product(&api.client(), Some(&user_session()), 10, 5)
        .await
        .unwrap();

    assert_eq!(average, Some(4.5));
    assert_eq!(api.requests(), vec!["POST /api/products/10/rating"]);
}

#[tokio::test]
async fn refresh_rewrites_valid_session_and_clears_rejected_one() {
    let api = MockApi::start().await;

    let stale = Session {
        role: None,
        ..user_session()
    };
    let store = MemorySessionStore::with_session(&stale);
    let refreshed = actions::refresh_session(&api.client(), &store).await.unwrap();
    assert_eq!(refreshed.role, Some(Role::User));
    assert_eq!(store.load(), Some(refreshed));

    let revoked = MemorySessionStore::with_session(&Session {
        token: Some("revoked".to_string()),
        ..user_session()
    });
    assert!(actions::refresh_session(&api.client(), &revoked).await.is_none());
    assert!(revoked.load().is_none());
}

#[tokio::test]
async fn refresh_without_stored_session_sends_nothing() {
    let api = MockApi::start().await;
    let store = MemorySessionStore::new();

    assert!(actions::refresh_session(&api.client(), &store).await.is_none());
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn comments_and_tags_are_appended() {
    let api = MockApi::start().await;
    let client = api.client().with_token(Some(USER_TOKEN));
    let mut comments = Vec::new();
    let mut tags = Vec::new();

    actions::add_comment(&client, &mut comments, 10, "  Muito bom!  ").await.unwrap();
    actions::add_tag(&client, &mut tags, 10, " vegano ").await.unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].comment, "Muito bom!");
    assert_eq!(comments[0].author(), "Ulisses");
    assert_eq!(tags[0].tag_name, "vegano");
    assert_eq!(tags[0].product_id, Some(10));
}

#[tokio::test]
async fn blank_tag_sends_nothing() {
    let api = MockApi::start().await;
    let client = api.client().with_token(Some(USER_TOKEN));
    let mut tags = Vec::new();

    let err = actions::add_tag(&client, &mut tags, 10, "   ").await.unwrap_err();

    assert_eq!(err, ActionError::Validation(FormError::Blank));
    assert!(tags.is_empty());
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn logout_clears_store() {
    let store = MemorySessionStore::with_session(&user_session());
    actions::logout(&store);
    assert!(store.load().is_none());
}
