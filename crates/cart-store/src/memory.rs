use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Cart, CartId, CartStore, CustomerId, ProductId, Result, StoreError};

#[derive(Debug)]
struct Carts {
    records: BTreeMap<CartId, Cart>,
    next_id: CartId,
}

impl Default for Carts {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: CartId::first(),
        }
    }
}

/// In-memory cart store.
///
/// A single readers-writer lock guards the whole collection: reads proceed
/// in parallel, while create, add_item and delete take exclusive access for
/// the duration of one cart mutation. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStore {
    carts: Arc<RwLock<Carts>>,
}

impl InMemoryCartStore {
    /// Creates a new empty in-memory cart store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn create(&self, customer_id: CustomerId) -> Result<Cart> {
        let mut carts = self.carts.write().await;

        let cart_id = carts.next_id;
        let cart = Cart::new(cart_id, customer_id);
        carts.records.insert(cart_id, cart.clone());
        carts.next_id = cart_id.next();

        tracing::debug!(%cart_id, %customer_id, "cart stored");
        Ok(cart)
    }

    async fn get(&self, cart_id: CartId) -> Result<Cart> {
        let carts = self.carts.read().await;
        carts
            .records
            .get(&cart_id)
            .cloned()
            .ok_or(StoreError::CartNotFound(cart_id))
    }

    async fn add_item(&self, cart_id: CartId, product_id: ProductId, quantity: i64) -> Result<()> {
        let mut carts = self.carts.write().await;

        let cart = carts
            .records
            .get_mut(&cart_id)
            .ok_or(StoreError::CartNotFound(cart_id))?;

        let total = cart
            .add_quantity(product_id, quantity)
            .ok_or(StoreError::QuantityOverflow {
                cart_id,
                product_id,
            })?;

        tracing::debug!(%cart_id, %product_id, quantity, total, "cart item stored");
        Ok(())
    }

    async fn delete(&self, cart_id: CartId) -> Result<Cart> {
        let mut carts = self.carts.write().await;
        carts
            .records
            .remove(&cart_id)
            .ok_or(StoreError::CartNotFound(cart_id))
    }

    async fn restore(&self, cart: Cart) -> Result<()> {
        let mut carts = self.carts.write().await;

        let cart_id = cart.cart_id;
        if cart_id >= carts.next_id || carts.records.contains_key(&cart_id) {
            return Err(StoreError::RestoreConflict(cart_id));
        }
        carts.records.insert(cart_id, cart);

        tracing::debug!(%cart_id, "cart restored");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.carts.read().await.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let store = InMemoryCartStore::new();

        let first = store.create(CustomerId::new(7)).await.unwrap();
        let second = store.create(CustomerId::new(7)).await.unwrap();

        assert_eq!(first.cart_id, CartId::new(1));
        assert_eq!(second.cart_id, CartId::new(2));
        assert!(first.is_empty());
        assert_eq!(first.customer_id, CustomerId::new(7));
    }

    #[tokio::test]
    async fn get_returns_stored_cart() {
        let store = InMemoryCartStore::new();
        let created = store.create(CustomerId::new(3)).await.unwrap();

        let fetched = store.get(created.cart_id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_cart_is_not_found() {
        let store = InMemoryCartStore::new();

        let result = store.get(CartId::new(999)).await;
        assert!(matches!(result, Err(StoreError::CartNotFound(id)) if id == CartId::new(999)));
    }

    #[tokio::test]
    async fn add_item_accumulates_same_product() {
        let store = InMemoryCartStore::new();
        let cart = store.create(CustomerId::new(1)).await.unwrap();

        store
            .add_item(cart.cart_id, ProductId::new(100), 2)
            .await
            .unwrap();
        store
            .add_item(cart.cart_id, ProductId::new(100), 3)
            .await
            .unwrap();

        let cart = store.get(cart.cart_id).await.unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.item(ProductId::new(100)).unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn add_item_to_missing_cart_is_not_found() {
        let store = InMemoryCartStore::new();

        let result = store.add_item(CartId::new(1), ProductId::new(100), 1).await;
        assert!(matches!(result, Err(StoreError::CartNotFound(_))));
    }

    #[tokio::test]
    async fn add_item_overflow_is_rejected() {
        let store = InMemoryCartStore::new();
        let cart = store.create(CustomerId::new(1)).await.unwrap();
        store
            .add_item(cart.cart_id, ProductId::new(100), i64::MAX)
            .await
            .unwrap();

        let result = store.add_item(cart.cart_id, ProductId::new(100), 1).await;
        assert!(matches!(result, Err(StoreError::QuantityOverflow { .. })));

        let cart = store.get(cart.cart_id).await.unwrap();
        assert_eq!(cart.item(ProductId::new(100)).unwrap().quantity, i64::MAX);
    }

    #[tokio::test]
    async fn returned_cart_is_detached_from_store() {
        let store = InMemoryCartStore::new();
        let cart = store.create(CustomerId::new(1)).await.unwrap();

        let mut snapshot = store.get(cart.cart_id).await.unwrap();
        snapshot.items.push(crate::CartItem::new(ProductId::new(5), 9));

        store
            .add_item(cart.cart_id, ProductId::new(100), 1)
            .await
            .unwrap();

        let stored = store.get(cart.cart_id).await.unwrap();
        assert!(stored.item(ProductId::new(5)).is_none());
        assert_eq!(snapshot.item_count(), 1);
        assert!(snapshot.item(ProductId::new(100)).is_none());
    }

    #[tokio::test]
    async fn delete_removes_cart_and_never_reissues_id() {
        let store = InMemoryCartStore::new();
        let cart = store.create(CustomerId::new(1)).await.unwrap();

        store.delete(cart.cart_id).await.unwrap();

        assert!(matches!(
            store.get(cart.cart_id).await,
            Err(StoreError::CartNotFound(_))
        ));
        assert!(matches!(
            store.add_item(cart.cart_id, ProductId::new(1), 1).await,
            Err(StoreError::CartNotFound(_))
        ));
        assert!(matches!(
            store.delete(cart.cart_id).await,
            Err(StoreError::CartNotFound(_))
        ));

        let next = store.create(CustomerId::new(1)).await.unwrap();
        assert_eq!(next.cart_id, CartId::new(2));
    }

    #[tokio::test]
    async fn count_tracks_live_carts() {
        let store = InMemoryCartStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        let cart = store.create(CustomerId::new(1)).await.unwrap();
        store.create(CustomerId::new(2)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        store.delete(cart.cart_id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);

        let next = store.create(CustomerId::new(3)).await.unwrap();
        assert_eq!(next.cart_id, CartId::new(3));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_returns_record_at_removal() {
        let store = InMemoryCartStore::new();
        let cart = store.create(CustomerId::new(1)).await.unwrap();
        store
            .add_item(cart.cart_id, ProductId::new(100), 4)
            .await
            .unwrap();

        let removed = store.delete(cart.cart_id).await.unwrap();
        assert_eq!(removed.customer_id, CustomerId::new(1));
        assert_eq!(removed.item(ProductId::new(100)).unwrap().quantity, 4);
    }

    #[tokio::test]
    async fn restore_puts_back_removed_cart() {
        let store = InMemoryCartStore::new();
        let cart = store.create(CustomerId::new(1)).await.unwrap();
        store
            .add_item(cart.cart_id, ProductId::new(100), 2)
            .await
            .unwrap();

        let removed = store.delete(cart.cart_id).await.unwrap();
        store.restore(removed.clone()).await.unwrap();

        assert_eq!(store.get(cart.cart_id).await.unwrap(), removed);
        assert!(matches!(
            store.restore(removed).await,
            Err(StoreError::RestoreConflict(_))
        ));
    }

    #[tokio::test]
    async fn restore_never_issues_new_identifiers() {
        let store = InMemoryCartStore::new();

        let result = store
            .restore(Cart::new(CartId::new(1), CustomerId::new(1)))
            .await;
        assert!(matches!(result, Err(StoreError::RestoreConflict(id)) if id == CartId::new(1)));
        assert_eq!(store.count().await.unwrap(), 0);

        let cart = store.create(CustomerId::new(1)).await.unwrap();
        assert_eq!(cart.cart_id, CartId::new(1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_additions_are_not_lost() {
        let store = InMemoryCartStore::new();
        let cart = store.create(CustomerId::new(1)).await.unwrap();
        let cart_id = cart.cart_id;

        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add_item(cart_id, ProductId::new(100), 1)
                        .await
                        .unwrap();
                })
            })
            .collect();
        for result in futures_util::future::join_all(tasks).await {
            result.unwrap();
        }

        let cart = store.get(cart_id).await.unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.item(ProductId::new(100)).unwrap().quantity, 100);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_yield_unique_ids() {
        let store = InMemoryCartStore::new();

        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(CustomerId::new(i + 1)).await.unwrap() })
            })
            .collect();

        let mut ids: Vec<CartId> = futures_util::future::join_all(tasks)
            .await
            .into_iter()
            .map(|r| r.unwrap().cart_id)
            .collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 50);
        assert_eq!(ids.first(), Some(&CartId::new(1)));
        assert_eq!(ids.last(), Some(&CartId::new(50)));
    }
}
