use thiserror::Error;

use crate::{CartId, ProductId};

/// Errors that can occur when interacting with the cart store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No cart with the given identifier is stored.
    /// Covers carts that never existed and carts already deleted.
    #[error("Cart not found: {0}")]
    CartNotFound(CartId),

    /// Accumulating a line item quantity would overflow.
    #[error("Quantity overflow for product {product_id} in cart {cart_id}")]
    QuantityOverflow {
        cart_id: CartId,
        product_id: ProductId,
    },

    /// A removed cart cannot be put back under its identifier.
    #[error("Cannot restore cart {0}")]
    RestoreConflict(CartId),

    /// The backing storage could not serve the request.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for cart store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
