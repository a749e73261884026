use serde::{Deserialize, Serialize};

use super::{Id, Product, null_as_default};

/// A store as listed by the `store` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Store {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Street address, free text.
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    /// Phone or other contact line.
    #[serde(deserialize_with = "null_as_default")]
    pub contact: String,
    /// Longer description shown on the store page.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Cover image, if one was uploaded.
    pub image_url: Option<String>,
    /// Owning user's id.
    pub owner_id: Option<Id>,
    /// Owning user's email, used for edit rights.
    pub owner_email: Option<String>,
    /// Only present on the detail endpoints.
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

/// Body of store create and update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact line.
    pub contact: String,
    /// Cover image URL, empty when none.
    pub image_url: String,
    /// Longer description.
    pub description: String,
}

impl From<&Store> for StoreRequest {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            address: store.address.clone(),
            contact: store.contact.clone(),
            image_url: store.image_url.clone().unwrap_or_default(),
            description: store.description.clone(),
        }
    }
}
