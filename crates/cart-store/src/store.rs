use async_trait::async_trait;

use crate::{Cart, CartId, CustomerId, ProductId, Result};

/// Core trait for cart store implementations.
///
/// A cart store exclusively owns the canonical cart records. Callers only
/// ever receive owned copies, never references into the stored collection.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Creates an empty cart for a customer.
    ///
    /// Identifiers start at 1, strictly increase, and are never reissued,
    /// even after the cart is deleted.
    async fn create(&self, customer_id: CustomerId) -> Result<Cart>;

    /// Returns a copy of the stored cart.
    ///
    /// Fails with `CartNotFound` if no cart with that identifier exists.
    async fn get(&self, cart_id: CartId) -> Result<Cart>;

    /// Adds `quantity` of a product to a cart.
    ///
    /// If the product already has a line item its quantity is incremented,
    /// otherwise a new line item is appended. The read-modify-write is atomic
    /// with respect to concurrent callers.
    async fn add_item(&self, cart_id: CartId, product_id: ProductId, quantity: i64) -> Result<()>;

    /// Permanently removes a cart and returns the record as it was at the
    /// moment of removal.
    ///
    /// Fails with `CartNotFound` if the cart is absent, including when a
    /// concurrent caller removed it first.
    async fn delete(&self, cart_id: CartId) -> Result<Cart>;

    /// Puts back a cart previously returned by `delete`.
    ///
    /// Only undoes a removal whose follow-up failed; it never issues a new
    /// identifier. Fails with `RestoreConflict` if the identifier is
    /// occupied or was never issued by this store.
    async fn restore(&self, cart: Cart) -> Result<()>;

    /// Returns the number of live carts.
    async fn count(&self) -> Result<usize>;
}
