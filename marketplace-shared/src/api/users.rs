use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Id, User, UserUpdate};

/// Administrative user management. Every call needs an admin token.
impl ApiClient {
    /// Every registered account.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.require_token()?;
        self.get_json("users").await
    }

    /// One account by id.
    pub async fn get_user(&self, id: Id) -> Result<User, ApiError> {
        self.require_token()?;
        self.get_json(&format!("users/{id}")).await
    }

    /// Edit another account, role included.
    pub async fn update_user(&self, id: Id, update: &UserUpdate) -> Result<User, ApiError> {
        self.require_token()?;
        self.send_json(Method::PUT, &format!("users/{id}"), update).await
    }

    /// Delete an account.
    pub async fn delete_user(&self, id: Id) -> Result<(), ApiError> {
        self.require_token()?;
        self.send_empty(Method::DELETE, &format!("users/{id}")).await
    }
}
