//! Collaborator ports consumed by the cart workflow.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use cart_store::Cart;
use common::{OrderId, ProductId};

use crate::error::CartError;

/// Answers whether a product exists in the catalog.
///
/// Implementations may be remote. The workflow never holds a cart store
/// lock while awaiting this call.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Returns true if a product with this identifier exists.
    async fn product_exists(&self, product_id: ProductId) -> Result<bool, CartError>;
}

/// Turns a non-empty cart into an order.
///
/// Payment, inventory reservation and order persistence sit behind this
/// port; the cart workflow only needs the resulting order identifier.
#[async_trait]
pub trait OrderPlacement: Send + Sync {
    /// Places an order for the cart contents and returns its identifier.
    async fn place_order(&self, cart: &Cart) -> Result<OrderId, CartError>;
}

#[async_trait]
impl<T: ProductLookup + ?Sized> ProductLookup for Arc<T> {
    async fn product_exists(&self, product_id: ProductId) -> Result<bool, CartError> {
        (**self).product_exists(product_id).await
    }
}

#[async_trait]
impl<T: OrderPlacement + ?Sized> OrderPlacement for Arc<T> {
    async fn place_order(&self, cart: &Cart) -> Result<OrderId, CartError> {
        (**self).place_order(cart).await
    }
}

/// Order placement stub deriving the order identifier from the cart.
///
/// `order_id = cart_id * multiplier`. No order is persisted and nothing is
/// charged or reserved.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticOrderPlacement {
    multiplier: i64,
}

impl SyntheticOrderPlacement {
    /// Multiplier used by [`Default`].
    pub const DEFAULT_MULTIPLIER: i64 = 1000;

    /// Creates a stub with a custom multiplier.
    pub fn new(multiplier: i64) -> Self {
        Self { multiplier }
    }

    /// Returns the configured multiplier.
    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }
}

impl Default for SyntheticOrderPlacement {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MULTIPLIER)
    }
}

#[async_trait]
impl OrderPlacement for SyntheticOrderPlacement {
    async fn place_order(&self, cart: &Cart) -> Result<OrderId, CartError> {
        cart.cart_id
            .as_i64()
            .checked_mul(self.multiplier)
            .map(OrderId::new)
            .ok_or_else(|| {
                CartError::Internal(format!(
                    "order id for cart {} overflows with multiplier {}",
                    cart.cart_id, self.multiplier
                ))
            })
    }
}

#[derive(Debug, Default)]
struct InMemoryLookupState {
    known: HashSet<ProductId>,
    unavailable: bool,
}

/// In-memory product lookup backed by a set of known identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductLookup {
    state: Arc<RwLock<InMemoryLookupState>>,
}

impl InMemoryProductLookup {
    /// Creates an empty lookup that knows no products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lookup that knows the given products.
    pub fn with_products(products: impl IntoIterator<Item = i64>) -> Self {
        let lookup = Self::new();
        for product in products {
            lookup.insert(ProductId::new(product));
        }
        lookup
    }

    /// Registers a product as existing.
    pub fn insert(&self, product_id: ProductId) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .known
            .insert(product_id);
    }

    /// Makes every subsequent lookup fail as if the catalog were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .unavailable = unavailable;
    }
}

#[async_trait]
impl ProductLookup for InMemoryProductLookup {
    async fn product_exists(&self, product_id: ProductId) -> Result<bool, CartError> {
        let state = self
            .state
            .read()
            .map_err(|e| CartError::Internal(e.to_string()))?;

        if state.unavailable {
            return Err(CartError::Internal("catalog unavailable".to_string()));
        }

        Ok(state.known.contains(&product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CartId, CustomerId};

    fn cart(id: i64) -> Cart {
        Cart::new(CartId::new(id), CustomerId::new(1))
    }

    #[tokio::test]
    async fn synthetic_order_id_is_cart_id_times_multiplier() {
        let orders = SyntheticOrderPlacement::default();

        let order_id = orders.place_order(&cart(1)).await.unwrap();
        assert_eq!(order_id, OrderId::new(1000));

        let order_id = orders.place_order(&cart(42)).await.unwrap();
        assert_eq!(order_id, OrderId::new(42_000));
    }

    #[tokio::test]
    async fn synthetic_order_id_overflow_is_internal() {
        let orders = SyntheticOrderPlacement::new(2);

        let result = orders.place_order(&cart(i64::MAX)).await;
        assert!(matches!(result, Err(CartError::Internal(_))));
    }

    #[tokio::test]
    async fn lookup_reports_known_products() {
        let lookup = InMemoryProductLookup::with_products([100, 200]);

        assert!(lookup.product_exists(ProductId::new(100)).await.unwrap());
        assert!(!lookup.product_exists(ProductId::new(300)).await.unwrap());

        lookup.insert(ProductId::new(300));
        assert!(lookup.product_exists(ProductId::new(300)).await.unwrap());
    }

    #[tokio::test]
    async fn unavailable_lookup_fails() {
        let lookup = InMemoryProductLookup::with_products([100]);
        lookup.set_unavailable(true);

        let result = lookup.product_exists(ProductId::new(100)).await;
        assert!(matches!(result, Err(CartError::Internal(_))));
    }

    #[tokio::test]
    async fn shared_lookup_delegates() {
        let lookup: Arc<dyn ProductLookup> = Arc::new(InMemoryProductLookup::with_products([7]));
        assert!(lookup.product_exists(ProductId::new(7)).await.unwrap());
    }
}
