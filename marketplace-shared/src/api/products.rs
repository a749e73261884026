use reqwest::Method;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use super::{ApiClient, ApiError};
use crate::models::{AverageRating, Id, Product, ProductRequest, RatingRequest, RatingResponse};

/// Server-side ordering for `GET products`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortKey {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
}

impl ProductSortKey {
    /// Value of the `sortBy` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Parse a `sortBy` value; unknown values give `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::iter().find(|key| key.as_str().eq_ignore_ascii_case(value))
    }
}

/// Filters for the product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    /// Name substring; blank means no filter.
    pub search: Option<String>,
    /// Server-side ordering; `None` keeps the server default.
    pub sort: Option<ProductSortKey>,
    /// Tag names; a product matches when it carries any of them.
    pub tags: Vec<String>,
}

impl ProductListQuery {
    /// Query pairs in request order. Blank search terms and tags are dropped.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sortBy", sort.as_str().to_string()));
        }
        pairs.extend(
            self.tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(|tag| ("tags", tag.to_string())),
        );
        pairs
    }
}

impl ApiClient {
    /// `GET products` with the query's filters.
    pub async fn list_products(&self, query: &ProductListQuery) -> Result<Vec<Product>, ApiError> {
        let builder = self.request(Method::GET, "products").query(&query.to_pairs());
        let response = self.execute(builder).await?;
        Self::read_json(response).await
    }

    /// Products of one store.
    pub async fn store_products(&self, store_id: Id) -> Result<Vec<Product>, ApiError> {
        self.get_json(&format!("products/store/{store_id}")).await
    }

    /// Add a product to a store the token's owner may edit.
    pub async fn create_product(
        &self,
        store_id: Id,
        request: &ProductRequest,
    ) -> Result<Product, ApiError> {
        self.require_token()?;
        self.send_json(Method::POST, &format!("products/store/{store_id}"), request)
            .await
    }

    /// Replace a product's editable fields.
    pub async fn update_product(
        &self,
        product_id: Id,
        request: &ProductRequest,
    ) -> Result<Product, ApiError> {
        self.require_token()?;
        self.send_json(Method::PUT, &format!("products/{product_id}"), request)
            .await
    }

    /// Delete a product.
    pub async fn delete_product(&self, product_id: Id) -> Result<(), ApiError> {
        self.require_token()?;
        self.send_empty(Method::DELETE, &format!("products/{product_id}"))
            .await
    }

    /// Rate a product from 1 to 5. Returns the server's view of the rating.
    pub async fn rate_product(&self, product_id: Id, rating: u8) -> Result<RatingResponse, ApiError> {
        self.require_token()?;
        self.send_json(
            Method::POST,
            &format!("products/{product_id}/rating"),
            &RatingRequest { rating },
        )
        .await
    }

    /// Withdraw the token owner's rating.
    pub async fn remove_rating(&self, product_id: Id) -> Result<(), ApiError> {
        self.require_token()?;
        self.send_empty(Method::DELETE, &format!("products/{product_id}/rating"))
            .await
    }

    /// Current average rating, zero when nobody has rated.
    pub async fn average_rating(&self, product_id: Id) -> Result<f64, ApiError> {
        let average: AverageRating = self
            .get_json(&format!("products/{product_id}/rating/average"))
            .await?;
        Ok(average.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_match_server_values() {
        let values: Vec<_> = ProductSortKey::iter().map(ProductSortKey::as_str).collect();
        assert_eq!(values, ["price_asc", "price_desc", "newest", "oldest"]);
        assert_eq!(ProductSortKey::parse(" PRICE_DESC "), Some(ProductSortKey::PriceDesc));
        assert_eq!(ProductSortKey::parse("cheapest"), None);
    }

    #[test]
    fn query_pairs_repeat_tags_and_skip_blanks() {
        let query = ProductListQuery {
            search: Some("  ".to_string()),
            sort: Some(ProductSortKey::PriceAsc),
            tags: vec!["doce".to_string(), String::new(), "salgado".to_string()],
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("sortBy", "price_asc".to_string()),
                ("tags", "doce".to_string()),
                ("tags", "salgado".to_string()),
            ]
        );
        assert!(ProductListQuery::default().to_pairs().is_empty());
    }
}
