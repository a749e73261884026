//! Frontend configuration module
//!
//! Values are baked in at build time so the static bundle needs no runtime
//! configuration endpoint.

use shared::catalog::DEFAULT_PAGE_SIZE;
use shared::config::DEFAULT_API_URL;

/// Currency symbol shown in front of prices when none is configured.
pub const DEFAULT_CURRENCY: &str = "R$";

/// Frontend configuration for the API location and display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the marketplace REST API
    pub api_url: String,
    /// Currency symbol used by price tags
    pub currency: String,
    /// Stores per page on the home grid
    pub page_size: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("MARKETPLACE_API_URL"),
            option_env!("MARKETPLACE_CURRENCY"),
            option_env!("MARKETPLACE_PAGE_SIZE"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from optional raw values, falling back to defaults
    /// for anything missing, blank or unparseable.
    pub fn from_values(
        api_url: Option<&str>,
        currency: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        fn non_blank(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }
        Self {
            api_url: non_blank(api_url).unwrap_or(DEFAULT_API_URL).to_string(),
            currency: non_blank(currency).unwrap_or(DEFAULT_CURRENCY).to_string(),
            page_size: non_blank(page_size)
                .and_then(|size| size.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
