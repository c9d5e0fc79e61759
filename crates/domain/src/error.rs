//! Domain error types.

use cart_store::StoreError;
use common::{CartId, ProductId};
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Every failing operation reports one of these kinds so callers can tell
/// caller errors apart from system errors.
#[derive(Debug, Error)]
pub enum CartError {
    /// Malformed or out-of-range identifier or quantity.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The cart never existed, was already checked out, or was deleted.
    #[error("Cart not found: {0}")]
    NotFound(CartId),

    /// The product does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout was attempted on a cart with no line items.
    #[error("Cart {0} is empty")]
    EmptyCart(CartId),

    /// Unexpected storage or collaborator failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for CartError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CartNotFound(cart_id) => CartError::NotFound(cart_id),
            StoreError::QuantityOverflow { .. } => CartError::InvalidInput(err.to_string()),
            StoreError::RestoreConflict(_) | StoreError::Unavailable(_) => {
                CartError::Internal(err.to_string())
            }
        }
    }
}
