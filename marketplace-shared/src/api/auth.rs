use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, User, UserUpdate};

impl ApiClient {
    /// Create an account. The server answers with the stored profile.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        self.send_json(Method::POST, "auth/register", request).await
    }

    /// Exchange credentials for a bearer token.
    ///
    /// Returns `Ok(None)` when the server accepted the credentials but sent no
    /// usable token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Option<String>, ApiError> {
        let response = self
            .execute(self.request(Method::POST, "auth/login").json(credentials))
            .await?;
        let body = response.text().await?;
        Ok(TokenResponse::parse(&body).into_token())
    }

    /// Profile of the token's owner.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.require_token()?;
        self.get_json("users/me").await
    }

    /// Update the token owner's own profile.
    pub async fn update_me(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.require_token()?;
        self.send_json(Method::PUT, "users/me", update).await
    }
}
