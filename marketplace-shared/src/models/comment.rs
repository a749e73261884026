use serde::{Deserialize, Serialize};

use super::{Id, null_as_default};

/// A shopper's comment on a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    /// Product the comment belongs to.
    pub product_id: Option<Id>,
    /// Author's user id.
    pub user_id: Option<Id>,
    /// Author's display name.
    pub user_name: Option<String>,
    /// Comment text.
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
    /// Server-formatted `yyyy-MM-dd HH:mm:ss`.
    pub created_at: Option<String>,
}

impl Comment {
    /// Author label, with a fallback for anonymous rows.
    #[must_use]
    pub fn author(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("?")
    }
}

/// Body of `POST comments/product/{productId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    /// Comment text, already trimmed.
    pub comment: String,
}
