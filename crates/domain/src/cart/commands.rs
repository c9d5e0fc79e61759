//! Cart commands.
//!
//! Commands carry the raw values received from callers. The service
//! validates them before touching the store.

use common::{CartId, CustomerId, ProductId};

/// Command to create a new, empty cart.
#[derive(Debug, Clone, Copy)]
pub struct CreateCart {
    /// The customer who will own the cart.
    pub customer_id: CustomerId,
}

impl CreateCart {
    /// Creates a new CreateCart command.
    pub fn new(customer_id: i64) -> Self {
        Self {
            customer_id: CustomerId::new(customer_id),
        }
    }
}

/// Command to add a quantity of a product to a cart.
#[derive(Debug, Clone, Copy)]
pub struct AddItem {
    /// The cart to add the item to.
    pub cart_id: CartId,

    /// The product to add.
    pub product_id: ProductId,

    /// Quantity to add; merged into an existing line item for the product.
    pub quantity: i64,
}

impl AddItem {
    /// Creates a new AddItem command.
    pub fn new(cart_id: i64, product_id: i64, quantity: i64) -> Self {
        Self {
            cart_id: CartId::new(cart_id),
            product_id: ProductId::new(product_id),
            quantity,
        }
    }
}

/// Command to check out a cart, converting it into an order.
#[derive(Debug, Clone, Copy)]
pub struct Checkout {
    /// The cart to check out.
    pub cart_id: CartId,
}

impl Checkout {
    /// Creates a new Checkout command.
    pub fn new(cart_id: i64) -> Self {
        Self {
            cart_id: CartId::new(cart_id),
        }
    }
}
