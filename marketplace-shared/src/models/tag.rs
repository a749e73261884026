use serde::{Deserialize, Serialize};

use super::{Id, null_as_default};

/// A free-form label attached to one product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    /// Product the tag is attached to.
    pub product_id: Option<Id>,
    /// Label text.
    #[serde(deserialize_with = "null_as_default")]
    pub tag_name: String,
}

/// Body of `POST tags/product/{productId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    /// Label text, already trimmed.
    pub tag_name: String,
}
