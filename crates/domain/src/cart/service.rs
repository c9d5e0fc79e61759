//! Cart service enforcing the cart business rules.

use cart_store::{Cart, CartStore};
use common::{CartId, CustomerId, OrderId};

use super::{AddItem, Checkout, CreateCart, OrderPlacement, ProductLookup};
use crate::error::CartError;

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    /// Identifier of the order created from the cart.
    pub order_id: OrderId,
    /// The cart that was converted; it no longer exists in the store.
    pub cart_id: CartId,
    pub customer_id: CustomerId,
    /// Number of distinct products in the order.
    pub item_count: usize,
    /// Sum of all line item quantities.
    pub total_quantity: i64,
}

/// Service for managing shopping carts.
///
/// Validates every intent, consults the product catalog before mutating a
/// cart, and performs the checkout transition. A cart is `Active` from
/// creation until a successful checkout removes it; nothing can bring a
/// checked-out cart back under its old identifier.
pub struct CartService<S, P, O> {
    store: S,
    products: P,
    orders: O,
}

impl<S, P, O> CartService<S, P, O>
where
    S: CartStore,
    P: ProductLookup,
    O: OrderPlacement,
{
    /// Creates a new cart service over a store and its collaborators.
    pub fn new(store: S, products: P, orders: O) -> Self {
        Self {
            store,
            products,
            orders,
        }
    }

    /// Returns a reference to the underlying cart store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an empty cart and returns its identifier.
    #[tracing::instrument(skip(self))]
    pub async fn create_cart(&self, cmd: CreateCart) -> Result<CartId, CartError> {
        ensure(
            cmd.customer_id.is_valid(),
            "customer_id must be a positive integer",
        )?;

        let cart = self.store.create(cmd.customer_id).await?;

        metrics::counter!("carts_created_total").increment(1);
        tracing::info!(cart_id = %cart.cart_id, customer_id = %cart.customer_id, "cart created");
        Ok(cart.cart_id)
    }

    /// Returns a snapshot of a cart.
    #[tracing::instrument(skip(self))]
    pub async fn get_cart(&self, cart_id: CartId) -> Result<Cart, CartError> {
        ensure(cart_id.is_valid(), "cart_id must be a positive integer")?;

        Ok(self.store.get(cart_id).await?)
    }

    /// Adds a quantity of a product to a cart.
    ///
    /// The cart and the product must both exist. Both checks run before
    /// the store is mutated, so a failed check leaves the cart untouched.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(&self, cmd: AddItem) -> Result<(), CartError> {
        ensure(cmd.cart_id.is_valid(), "cart_id must be a positive integer")?;
        ensure(
            cmd.product_id.is_valid(),
            "product_id must be a positive integer",
        )?;
        ensure(cmd.quantity >= 1, "quantity must be a positive integer")?;

        self.store.get(cmd.cart_id).await?;

        if !self.products.product_exists(cmd.product_id).await? {
            tracing::warn!(product_id = %cmd.product_id, "rejected unknown product");
            return Err(CartError::ProductNotFound(cmd.product_id));
        }

        self.store
            .add_item(cmd.cart_id, cmd.product_id, cmd.quantity)
            .await?;

        metrics::counter!("cart_items_added_total").increment(1);
        Ok(())
    }

    /// Checks out a cart.
    ///
    /// Rejects empty carts and leaves them intact. The cart is removed from
    /// the store before the order is placed and the order is built from the
    /// removed record, so every addition acknowledged before the removal is
    /// part of the order and every later one fails with `NotFound`. If a
    /// concurrent caller removed the cart first the checkout fails with
    /// `NotFound`. If order placement fails the cart is put back unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn checkout(&self, cmd: Checkout) -> Result<CheckoutReceipt, CartError> {
        ensure(cmd.cart_id.is_valid(), "cart_id must be a positive integer")?;

        let cart = self.store.get(cmd.cart_id).await?;
        if cart.is_empty() {
            metrics::counter!("checkouts_rejected_total").increment(1);
            tracing::warn!(cart_id = %cart.cart_id, "rejected checkout of empty cart");
            return Err(CartError::EmptyCart(cart.cart_id));
        }

        // Line items are never removed, so the removed record is non-empty too
        let cart = self.store.delete(cart.cart_id).await?;

        let order_id = match self.orders.place_order(&cart).await {
            Ok(order_id) => order_id,
            Err(err) => {
                tracing::error!(cart_id = %cart.cart_id, error = %err, "order placement failed");
                self.store.restore(cart).await?;
                return Err(err);
            }
        };

        metrics::counter!("checkouts_total").increment(1);
        tracing::info!(cart_id = %cart.cart_id, %order_id, "cart checked out");

        Ok(CheckoutReceipt {
            order_id,
            cart_id: cart.cart_id,
            customer_id: cart.customer_id,
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        })
    }
}

fn ensure(valid: bool, message: &str) -> Result<(), CartError> {
    if valid {
        Ok(())
    } else {
        Err(CartError::InvalidInput(message.to_string()))
    }
}
