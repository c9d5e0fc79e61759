//! Domain layer for the shopping cart service.
//!
//! This crate provides the cart workflow on top of a [`cart_store::CartStore`]:
//! - Input validation for every cart intent
//! - The product existence check against an injected catalog lookup
//! - The checkout transition from an active cart to an order

pub mod cart;
pub mod error;

pub use cart::{
    AddItem, CartService, Checkout, CheckoutReceipt, CreateCart, InMemoryProductLookup,
    OrderPlacement, ProductLookup, SyntheticOrderPlacement,
};
pub use error::CartError;
