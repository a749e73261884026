//! User workflows shared by the views.
//!
//! Every workflow validates its input before touching the network, so a
//! rejected form never costs a request.

use std::future::Future;

use thiserror::Error;
use tracing::{info, warn};

use crate::access::Landing;
use crate::api::{ApiClient, ApiError};
use crate::forms::{non_blank, parse_store_id, FormError, ProductForm, ProfileForm, RegisterForm, StoreForm};
use crate::models::{Comment, Id, LoginRequest, Product, Session, Store, StoreRequest, Tag, User};
use crate::session::{SessionStore, SessionStoreError};

/// Highest value of the star rating.
pub const MAX_RATING: u8 = 5;

/// Why a workflow did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Input failed client-side validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] FormError),
    /// The request failed or the server refused it.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The action needs a signed-in session; nothing was sent.
    #[error("you need to be signed in to do that")]
    LoginRequired,
    /// Login succeeded without a token in the body.
    #[error("the server did not return an access token")]
    MissingToken,
    /// The session could not be persisted.
    #[error(transparent)]
    Storage(#[from] SessionStoreError),
}

/// Sign in, persist the session and pick the landing view.
///
/// # Errors
/// Fails on blank credentials, a rejected login, a missing token, or when the
/// profile cannot be fetched or the session cannot be stored.
pub async fn login(
    client: &ApiClient,
    store: &impl SessionStore,
    credentials: &LoginRequest,
) -> Result<(Session, Landing), ActionError> {
    let credentials = LoginRequest {
        email: non_blank(&credentials.email).map_err(|_| FormError::Required("email"))?,
        password: credentials.password.clone(),
    };
    if credentials.password.is_empty() {
        return Err(FormError::Required("password").into());
    }

    let token = client
        .login(&credentials)
        .await?
        .ok_or(ActionError::MissingToken)?;
    let profile = client.with_token(Some(&token)).me().await?;
    let session = Session::from_profile(&profile, token);
    store.save(&session)?;

    info!(email = %profile.email, role = ?profile.role, "signed in");
    let landing = Landing::for_role(session.role);
    Ok((session, landing))
}

/// Create an account. Nobody is signed in afterwards.
///
/// # Errors
/// Fails on an invalid form or a rejected request.
pub async fn register(client: &ApiClient, form: &RegisterForm) -> Result<User, ActionError> {
    let request = form.to_request()?;
    Ok(client.register(&request).await?)
}

/// Re-validate the stored session against `users/me`.
///
/// A session the server no longer accepts is cleared.
pub async fn refresh_session(client: &ApiClient, store: &impl SessionStore) -> Option<Session> {
    let token = store.load()?.token()?.to_string();
    match client.with_token(Some(&token)).me().await {
        Ok(profile) => {
            let session = Session::from_profile(&profile, token);
            if let Err(err) = store.save(&session) {
                warn!(error = %err, "failed to persist refreshed session");
            }
            Some(session)
        }
        Err(err) => {
            warn!(error = %err, "stored session rejected, signing out");
            store.clear();
            None
        }
    }
}

/// Forget the stored session.
pub fn logout(store: &impl SessionStore) {
    store.clear();
}

/// # Errors
/// Fails on an invalid store id or form before any request is made.
pub async fn create_product(
    client: &ApiClient,
    store_id: &str,
    form: &ProductForm,
) -> Result<Product, ActionError> {
    let store_id = parse_store_id(store_id)?;
    let request = form.to_request()?;
    Ok(client.create_product(store_id, &request).await?)
}

/// # Errors
/// Fails on an invalid form before any request is made.
pub async fn update_product(
    client: &ApiClient,
    product_id: Id,
    form: &ProductForm,
) -> Result<Product, ActionError> {
    let request = form.to_request()?;
    Ok(client.update_product(product_id, &request).await?)
}

/// Rate a product and return the new average.
///
/// A value of zero means nothing was picked and gives `Ok(None)`.
///
/// # Errors
/// Returns [`ActionError::LoginRequired`] without a request when the session
/// holds no token.
pub async fn rate_product(
    client: &ApiClient,
    session: Option<&Session>,
    product_id: Id,
    value: u8,
) -> Result<Option<f64>, ActionError> {
    if value == 0 {
        return Ok(None);
    }
    let token = session
        .and_then(Session::token)
        .ok_or(ActionError::LoginRequired)?;
    let response = client
        .with_token(Some(token))
        .rate_product(product_id, value.min(MAX_RATING))
        .await?;
    Ok(Some(response.average()))
}

/// Create a store, or update it when `id` is given.
///
/// # Errors
/// Fails when the request is rejected.
pub async fn save_store(
    client: &ApiClient,
    id: Option<Id>,
    form: &StoreForm,
) -> Result<Store, ActionError> {
    let request = StoreRequest::from(form);
    let store = match id {
        Some(id) => client.update_store(id, &request).await?,
        None => client.create_store(&request).await?,
    };
    Ok(store)
}

/// Update the signed-in user's own profile.
///
/// # Errors
/// Fails on mismatched passwords before any request is made.
pub async fn save_profile(client: &ApiClient, form: &ProfileForm) -> Result<User, ActionError> {
    let update = form.to_update()?;
    Ok(client.update_me(&update).await?)
}

/// Admin edit of any user.
///
/// # Errors
/// Fails on mismatched passwords before any request is made.
pub async fn save_user(client: &ApiClient, id: Id, form: &ProfileForm) -> Result<User, ActionError> {
    let update = form.to_update()?;
    Ok(client.update_user(id, &update).await?)
}

async fn remove_confirmed<T, F>(
    items: &mut Vec<T>,
    id: Id,
    id_of: impl Fn(&T) -> Id,
    confirm: impl FnOnce() -> bool,
    request: F,
) -> Result<bool, ActionError>
where
    F: Future<Output = Result<(), ApiError>>,
{
    if !confirm() {
        return Ok(false);
    }
    request.await?;
    items.retain(|item| id_of(item) != id);
    Ok(true)
}

/// Delete a store once `confirm` agrees, then drop it from `stores`.
///
/// Returns whether the store was deleted.
///
/// # Errors
/// Fails when the request is rejected; `stores` is left untouched.
pub async fn delete_store(
    client: &ApiClient,
    stores: &mut Vec<Store>,
    id: Id,
    confirm: impl FnOnce() -> bool,
) -> Result<bool, ActionError> {
    remove_confirmed(stores, id, |store| store.id, confirm, client.delete_store(id)).await
}

/// # Errors
/// Fails when the request is rejected; `products` is left untouched.
pub async fn delete_product(
    client: &ApiClient,
    products: &mut Vec<Product>,
    id: Id,
    confirm: impl FnOnce() -> bool,
) -> Result<bool, ActionError> {
    remove_confirmed(products, id, |product| product.id, confirm, client.delete_product(id)).await
}

/// # Errors
/// Fails when the request is rejected; `users` is left untouched.
pub async fn delete_user(
    client: &ApiClient,
    users: &mut Vec<User>,
    id: Id,
    confirm: impl FnOnce() -> bool,
) -> Result<bool, ActionError> {
    remove_confirmed(users, id, |user| user.id, confirm, client.delete_user(id)).await
}

/// # Errors
/// Fails when the request is rejected; `tags` is left untouched.
pub async fn delete_tag(
    client: &ApiClient,
    tags: &mut Vec<Tag>,
    id: Id,
    confirm: impl FnOnce() -> bool,
) -> Result<bool, ActionError> {
    remove_confirmed(tags, id, |tag| tag.id, confirm, client.delete_tag(id)).await
}

/// # Errors
/// Fails when the request is rejected; `comments` is left untouched.
pub async fn delete_comment(
    client: &ApiClient,
    comments: &mut Vec<Comment>,
    id: Id,
    confirm: impl FnOnce() -> bool,
) -> Result<bool, ActionError> {
    remove_confirmed(comments, id, |comment| comment.id, confirm, client.delete_comment(id)).await
}

/// Post a comment and append it to `comments`.
///
/// # Errors
/// Blank text is rejected without a request.
pub async fn add_comment(
    client: &ApiClient,
    comments: &mut Vec<Comment>,
    product_id: Id,
    text: &str,
) -> Result<(), ActionError> {
    let text = non_blank(text)?;
    let comment = client.create_comment(product_id, &text).await?;
    comments.push(comment);
    Ok(())
}

/// Attach a tag to a product and append it to `tags`.
///
/// # Errors
/// A blank name is rejected without a request.
pub async fn add_tag(
    client: &ApiClient,
    tags: &mut Vec<Tag>,
    product_id: Id,
    name: &str,
) -> Result<(), ActionError> {
    let name = non_blank(name)?;
    let tag = client.create_tag(product_id, &name).await?;
    tags.push(tag);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    // Nothing listens on the discard port, so any request would surface as a
    // transport error rather than the validation errors asserted here.
    fn offline_client() -> ApiClient {
        ApiClient::new(&crate::config::ApiConfig::new("http://127.0.0.1:9/api")).with_token(Some("tok"))
    }

    #[tokio::test]
    async fn blank_credentials_fail_validation() {
        let store = MemorySessionStore::new();
        let credentials = LoginRequest {
            email: " ".to_string(),
            password: "x".to_string(),
        };
        let err = login(&offline_client(), &store, &credentials).await.unwrap_err();
        assert_eq!(err, ActionError::Validation(FormError::Required("email")));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn zero_rating_is_a_no_op() {
        let result = rate_product(&offline_client(), None, 1, 0).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn rating_without_session_requires_login() {
        let result = rate_product(&offline_client(), None, 1, 4).await;
        assert_eq!(result, Err(ActionError::LoginRequired));
    }

    #[tokio::test]
    async fn invalid_store_id_is_rejected() {
        let form = ProductForm {
            price: "10".to_string(),
            ..Default::default()
        };
        let err = create_product(&offline_client(), "abc", &form).await.unwrap_err();
        assert_eq!(err, ActionError::Validation(FormError::InvalidStoreId));
    }

    #[tokio::test]
    async fn refusing_confirmation_keeps_list() {
        let mut stores = vec![Store { id: 1, ..Default::default() }];
        let deleted = delete_store(&offline_client(), &mut stores, 1, || false).await;
        assert_eq!(deleted, Ok(false));
        assert_eq!(stores.len(), 1);
    }

    #[tokio::test]
    async fn blank_comment_is_rejected() {
        let mut comments = Vec::new();
        let err = add_comment(&offline_client(), &mut comments, 1, "  \n").await.unwrap_err();
        assert_eq!(err, ActionError::Validation(FormError::Blank));
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn refresh_without_token_returns_none() {
        let store = MemorySessionStore::with_session(&Session::default());
        assert!(refresh_session(&offline_client(), &store).await.is_none());
    }

    #[test]
    fn errors_display_inner_message() {
        let err = ActionError::from(ApiError::Status {
            status: 400,
            message: "Nome obrigatório".to_string(),
        });
        assert_eq!(err.to_string(), "Nome obrigatório");
        assert_eq!(
            ActionError::from(FormError::InvalidPrice).to_string(),
            "price must be a number greater than zero"
        );
    }
}
