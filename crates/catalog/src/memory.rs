use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::ProductId;
use domain::{CartError, ProductLookup};
use tokio::sync::RwLock;

use crate::Product;

/// In-memory product catalog.
///
/// Stores owned copies of products keyed by identifier. Clones share the
/// same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the product, if present.
    pub async fn get(&self, product_id: ProductId) -> Option<Product> {
        self.products.read().await.get(&product_id).cloned()
    }

    /// Creates or replaces a product.
    ///
    /// Returns true if the product was newly created.
    pub async fn upsert(&self, product: Product) -> bool {
        let mut products = self.products.write().await;
        products.insert(product.product_id, product).is_none()
    }

    /// Returns true if a product with this identifier exists.
    pub async fn exists(&self, product_id: ProductId) -> bool {
        self.products.read().await.contains_key(&product_id)
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Returns true if the catalog holds no products.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductLookup for InMemoryProductCatalog {
    async fn product_exists(&self, product_id: ProductId) -> Result<bool, CartError> {
        Ok(self.exists(product_id).await)
    }
}
