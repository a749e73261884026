use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{Comment, CommentRequest, Id};

impl ApiClient {
    /// Comments on a product, in server order.
    pub async fn product_comments(&self, product_id: Id) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("comments/product/{product_id}")).await
    }

    /// Post a comment as the token's owner.
    pub async fn create_comment(&self, product_id: Id, text: &str) -> Result<Comment, ApiError> {
        self.require_token()?;
        let request = CommentRequest {
            comment: text.to_string(),
        };
        self.send_json(
            Method::POST,
            &format!("comments/product/{product_id}"),
            &request,
        )
        .await
    }

    /// Only the author or an admin may delete; others get a 403.
    pub async fn delete_comment(&self, comment_id: Id) -> Result<(), ApiError> {
        self.require_token()?;
        self.send_empty(Method::DELETE, &format!("comments/{comment_id}"))
            .await
    }
}
