use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Id, Store, StoreRequest};

impl ApiClient {
    /// Every store, including private fields. Admin only.
    pub async fn list_stores(&self) -> Result<Vec<Store>, ApiError> {
        self.require_token()?;
        self.get_json("store").await
    }

    /// Stores visible to anonymous visitors.
    pub async fn list_public_stores(&self) -> Result<Vec<Store>, ApiError> {
        self.get_json("store/public").await
    }

    /// One store with its products, without authentication.
    pub async fn get_public_store(&self, id: Id) -> Result<Store, ApiError> {
        self.get_json(&format!("store/public/{id}")).await
    }

    /// Stores owned by the token's owner.
    pub async fn my_stores(&self) -> Result<Vec<Store>, ApiError> {
        self.require_token()?;
        self.get_json("store/my").await
    }

    /// One store through the authenticated endpoint.
    pub async fn get_store(&self, id: Id) -> Result<Store, ApiError> {
        self.require_token()?;
        self.get_json(&format!("store/{id}")).await
    }

    /// Fetch a store through the authenticated endpoint when a token is
    /// held, otherwise through the public one.
    pub async fn find_store(&self, id: Id) -> Result<Store, ApiError> {
        if self.token().is_some() {
            self.get_store(id).await
        } else {
            self.get_public_store(id).await
        }
    }

    /// Create a store owned by the token's owner.
    pub async fn create_store(&self, request: &StoreRequest) -> Result<Store, ApiError> {
        self.require_token()?;
        self.send_json(Method::POST, "store", request).await
    }

    /// Replace a store's editable fields.
    pub async fn update_store(&self, id: Id, request: &StoreRequest) -> Result<Store, ApiError> {
        self.require_token()?;
        self.send_json(Method::PUT, &format!("store/{id}"), request)
            .await
    }

    /// Delete a store.
    pub async fn delete_store(&self, id: Id) -> Result<(), ApiError> {
        self.require_token()?;
        self.send_empty(Method::DELETE, &format!("store/{id}")).await
    }
}
