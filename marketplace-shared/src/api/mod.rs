//! Resource clients for the marketplace REST API.
//!
//! [`ApiClient`] owns the transport and the bearer token; each submodule adds
//! the calls for one resource.

mod auth;
mod client;
mod comments;
mod products;
mod stores;
mod tags;
mod users;

pub use client::{ApiClient, ApiError};
pub use products::{ProductListQuery, ProductSortKey};
