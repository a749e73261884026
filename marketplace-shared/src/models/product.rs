use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Id, Tag, null_as_default};

/// Layout the API uses for `createdAt` on products.
pub const PRODUCT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A product as listed by the `products` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// List price before any discount.
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Units in stock, when tracked.
    pub quantity: Option<i64>,
    /// Discount in percent.
    pub discount: Option<f64>,
    /// Product photo.
    pub image_url: Option<String>,
    /// Creation time in [`PRODUCT_DATE_FORMAT`].
    pub created_at: Option<String>,
    /// Owning store's id.
    pub store_id: Option<Id>,
    /// Owning store's name, filled by the listing endpoints.
    pub store_name: Option<String>,
    /// Average of all ratings, when the listing includes it.
    pub average_rating: Option<f64>,
    /// Attached client-side from the tag listing.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl Product {
    /// Whether a positive discount applies.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount.is_some_and(|discount| discount > 0.0)
    }

    /// Price after the discount, or the list price when there is none.
    #[must_use]
    pub fn final_price(&self) -> f64 {
        match self.discount {
            Some(discount) if discount > 0.0 => self.price * (1.0 - discount / 100.0),
            _ => self.price,
        }
    }

    /// Average rating, zero when nobody has rated yet.
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.average_rating.unwrap_or_default()
    }

    /// Parsed creation time; `None` when absent or in an unknown layout.
    #[must_use]
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.created_at
            .as_deref()
            .and_then(|raw| NaiveDateTime::parse_from_str(raw.trim(), PRODUCT_DATE_FORMAT).ok())
    }
}

/// Render an amount with two decimals behind a currency symbol.
#[must_use]
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{symbol} {amount:.2}")
}

/// Body of product create and update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// List price, always positive.
    pub price: f64,
    /// Units in stock; omitted when left blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Discount in percent; omitted when left blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Photo URL, empty when none.
    pub image_url: String,
}

/// Body of `POST products/{id}/rating`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingRequest {
    /// Stars given, `1..=5`.
    pub rating: u8,
}

/// Result of rating a product.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingResponse {
    /// New average over every rating of the product.
    pub average_rating: Option<f64>,
    /// Older servers echo the caller's own rating here instead.
    pub rating: Option<f64>,
}

impl RatingResponse {
    /// The new average, falling back to the legacy `rating` field.
    #[must_use]
    pub fn average(&self) -> f64 {
        self.average_rating.or(self.rating).unwrap_or_default()
    }
}

/// Body of `GET products/{id}/rating/average`.
///
/// The server answers with a bare number, or `null` for a product nobody has
/// rated; a wrapped [`RatingResponse`] is accepted too.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AverageRating {
    /// A plain JSON number or `null`.
    Bare(Option<f64>),
    /// An object carrying `averageRating`.
    Wrapped(RatingResponse),
}

impl AverageRating {
    /// The average, zero when nobody has rated yet.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Bare(value) => value.unwrap_or_default(),
            Self::Wrapped(response) => response.average(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, discount: Option<f64>) -> Product {
        Product {
            price,
            discount,
            ..Default::default()
        }
    }

    #[test]
    fn final_price_applies_percent_discount() {
        let discounted = product(200.0, Some(25.0));
        assert!(discounted.has_discount());
        assert!((discounted.final_price() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_or_missing_discount_keeps_list_price() {
        assert!(!product(10.0, Some(0.0)).has_discount());
        assert!((product(10.0, Some(0.0)).final_price() - 10.0).abs() < f64::EPSILON);
        assert!((product(10.0, None).final_price() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money("R$", 12.5), "R$ 12.50");
        assert_eq!(format_money("$", 0.0), "$ 0.00");
    }

    #[test]
    fn created_parses_server_layout() {
        let product = Product {
            created_at: Some("05/03/2025 14:30:00".to_string()),
            ..Default::default()
        };
        let created = product.created().unwrap();
        assert_eq!(created.to_string(), "2025-03-05 14:30:00");

        let broken = Product {
            created_at: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(broken.created().is_none());
    }

    #[test]
    fn product_from_api_json() {
        let json = r#"{
            "id": 10, "name": "Pão", "price": 4.5, "quantity": 20,
            "description": "Fresco", "imageUrl": "", "discount": null,
            "createdAt": "01/01/2025 08:00:00", "storeId": 2, "storeName": "Padaria",
            "averageRating": 4.25
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.store_id, Some(2));
        assert!((product.rating() - 4.25).abs() < f64::EPSILON);
        assert!(product.tags.is_empty());
    }

    #[test]
    fn rating_response_prefers_average() {
        let both: RatingResponse = serde_json::from_str(r#"{"averageRating":3.5,"rating":5}"#).unwrap();
        assert!((both.average() - 3.5).abs() < f64::EPSILON);

        let legacy: RatingResponse = serde_json::from_str(r#"{"rating":4}"#).unwrap();
        assert!((legacy.average() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn product_with_null_columns() {
        let json = r#"{
            "id": 11, "name": "Bolo", "price": null, "quantity": null,
            "description": null, "imageUrl": null, "discount": null,
            "createdAt": null, "storeId": 2, "storeName": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.name, "Bolo");
        assert!(product.description.is_empty());
        assert!(product.price.abs() < f64::EPSILON);
        assert!(product.created().is_none());
    }

    #[test]
    fn average_accepts_bare_and_wrapped_bodies() {
        let bare: AverageRating = serde_json::from_str("4.5").unwrap();
        assert!((bare.value() - 4.5).abs() < f64::EPSILON);

        let unrated: AverageRating = serde_json::from_str("null").unwrap();
        assert!(unrated.value().abs() < f64::EPSILON);

        let wrapped: AverageRating = serde_json::from_str(r#"{"averageRating":3.75}"#).unwrap();
        assert!((wrapped.value() - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn request_skips_empty_optionals() {
        let request = ProductRequest {
            name: "Bolo".to_string(),
            price: 30.0,
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("discount").is_none());
        assert!(json.get("quantity").is_none());
        assert_eq!(json["imageUrl"], "");
    }
}
