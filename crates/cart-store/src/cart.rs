use serde::{Deserialize, Serialize};

use crate::{CartId, CustomerId, ProductId};

/// A single product line within a cart.
///
/// A cart holds at most one line item per product; repeated additions
/// accumulate into `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl CartItem {
    /// Creates a new line item.
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A customer's shopping cart.
///
/// Values handed out by a [`CartStore`](crate::CartStore) are owned snapshots:
/// they share no state with the stored record, so later mutations in the
/// store never show through, and edits to a snapshot never reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub cart_id: CartId,
    pub customer_id: CustomerId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new(cart_id: CartId, customer_id: CustomerId) -> Self {
        Self {
            cart_id,
            customer_id,
            items: Vec::new(),
        }
    }

    /// Returns an iterator over the line items.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Returns the line item for a product, if present.
    pub fn item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the sum of all line item quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Returns true if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` of a product, merging into an existing line item.
    ///
    /// Returns `None` and leaves the cart untouched if the merged quantity
    /// would overflow.
    pub(crate) fn add_quantity(&mut self, product_id: ProductId, quantity: i64) -> Option<i64> {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.checked_add(quantity)?;
                Some(existing.quantity)
            }
            None => {
                self.items.push(CartItem::new(product_id, quantity));
                Some(quantity)
            }
        }
    }
}
