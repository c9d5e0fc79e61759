//! Catalog error types.

use common::ProductId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product data failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// No product exists with the given identifier.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The identifier in the request path differs from the one in the body.
    #[error("Product ID mismatch: path {path}, body {body}")]
    IdMismatch { path: ProductId, body: ProductId },
}
