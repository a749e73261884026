use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Id, Tag, TagRequest};

impl ApiClient {
    /// Every tag of every product.
    pub async fn all_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json("tags/all").await
    }

    /// Tags attached to one product.
    pub async fn product_tags(&self, product_id: Id) -> Result<Vec<Tag>, ApiError> {
        self.get_json(&format!("tags/product/{product_id}")).await
    }

    /// Attach a new tag to a product.
    pub async fn create_tag(&self, product_id: Id, tag_name: &str) -> Result<Tag, ApiError> {
        self.require_token()?;
        let request = TagRequest {
            tag_name: tag_name.to_string(),
        };
        self.send_json(Method::POST, &format!("tags/product/{product_id}"), &request)
            .await
    }

    /// Remove a tag.
    pub async fn delete_tag(&self, tag_id: Id) -> Result<(), ApiError> {
        self.require_token()?;
        self.send_empty(Method::DELETE, &format!("tags/{tag_id}")).await
    }
}
