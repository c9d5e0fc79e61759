//! Shared identifier types for the shopping cart and product catalog services.

pub mod types;

pub use types::{CartId, CustomerId, OrderId, ProductId};
