//! HTTP route handlers.

pub mod carts;
pub mod health;
pub mod metrics;
pub mod products;

use std::sync::Arc;

use cart_store::CartStore;
use catalog::{CatalogService, InMemoryProductCatalog};
use domain::{CartService, SyntheticOrderPlacement};

use crate::error::ApiError;

/// Cart service wired to the in-process catalog and the synthetic order stub.
pub type AppCartService<S> = CartService<S, InMemoryProductCatalog, SyntheticOrderPlacement>;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CartStore> {
    pub cart_service: AppCartService<S>,
    pub catalog_service: CatalogService,
}

/// Handler state extractor type.
pub type SharedState<S> = Arc<AppState<S>>;

/// Parses an integer path segment, rejecting anything that is not a number.
///
/// Range checks are left to the services so they report `InvalidInput`
/// with the same wording as every other caller.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        ApiError::bad_request(
            format!("Invalid {what} ID"),
            format!("{what} ID must be a positive integer"),
        )
    })
}
