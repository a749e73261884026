//! Typed mirrors of the JSON records exchanged with the marketplace API.
//!
//! Field names follow the wire's camelCase spelling. Anything the server may
//! omit is an `Option` or carries a serde default, and plain fields read an
//! explicit `null` as their default through `null_as_default`.

use serde::{Deserialize, Deserializer};

pub mod comment;
pub mod errors;
pub mod product;
pub mod session;
pub mod store;
pub mod tag;
pub mod user;

pub use comment::{Comment, CommentRequest};
pub use errors::ErrorResponse;
pub use product::{AverageRating, Product, ProductRequest, RatingRequest, RatingResponse};
pub use session::{LoginRequest, Session, TokenResponse};
pub use store::{Store, StoreRequest};
pub use tag::{Tag, TagRequest};
pub use user::{RegisterRequest, Role, User, UserUpdate};

/// Numeric identifier used by every API resource.
pub type Id = i64;

/// Deserialize a field the server may send as `null`, falling back to `T::default()`.
///
/// Container-level `#[serde(default)]` only covers absent keys; nullable
/// database columns arrive as explicit `null` and need this as well.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        price: f64,
    }

    #[test]
    fn null_reads_as_default() {
        let row: Row = serde_json::from_str(r#"{"name":null,"price":null}"#).unwrap();
        assert!(row.name.is_empty());
        assert!(row.price.abs() < f64::EPSILON);
    }

    #[test]
    fn present_values_and_missing_keys() {
        let row: Row = serde_json::from_str(r#"{"name":"Loja"}"#).unwrap();
        assert_eq!(row.name, "Loja");
        assert!(row.price.abs() < f64::EPSILON);
    }
}
