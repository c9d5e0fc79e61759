//! Catalog service validating product reads and writes.

use common::ProductId;

use crate::{CatalogError, InMemoryProductCatalog, Product};

/// Service for reading and maintaining catalog products.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: InMemoryProductCatalog,
}

impl CatalogService {
    /// Creates a new catalog service over the given store.
    pub fn new(catalog: InMemoryProductCatalog) -> Self {
        Self { catalog }
    }

    /// Returns a reference to the underlying catalog.
    pub fn catalog(&self) -> &InMemoryProductCatalog {
        &self.catalog
    }

    /// Loads a product by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        if !product_id.is_valid() {
            return Err(CatalogError::InvalidProduct(
                "product_id must be a positive integer".to_string(),
            ));
        }

        self.catalog
            .get(product_id)
            .await
            .ok_or(CatalogError::ProductNotFound(product_id))
    }

    /// Creates or updates the details of a product.
    ///
    /// The identifier in `product` must match `product_id`.
    #[tracing::instrument(skip(self, product))]
    pub async fn add_product_details(
        &self,
        product_id: ProductId,
        product: Product,
    ) -> Result<(), CatalogError> {
        if !product_id.is_valid() {
            return Err(CatalogError::InvalidProduct(
                "product_id must be a positive integer".to_string(),
            ));
        }
        if product.product_id != product_id {
            return Err(CatalogError::IdMismatch {
                path: product_id,
                body: product.product_id,
            });
        }
        product.validate()?;

        let created = self.catalog.upsert(product).await;

        metrics::counter!("products_upserted_total").increment(1);
        tracing::info!(%product_id, created, "product details stored");
        Ok(())
    }
}
