//! Product record and its validation rules.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Maximum SKU length in characters.
pub const MAX_SKU_LEN: usize = 100;

/// Maximum manufacturer name length in characters.
pub const MAX_MANUFACTURER_LEN: usize = 200;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub sku: String,
    pub manufacturer: String,
    pub category_id: i64,
    /// Weight in grams.
    pub weight: i64,
    pub some_other_id: i64,
}

impl Product {
    /// Checks the product fields, returning the first violation found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.product_id.is_valid() {
            return Err(invalid("product_id must be positive"));
        }
        if self.sku.is_empty() {
            return Err(invalid("sku is required"));
        }
        if self.sku.chars().count() > MAX_SKU_LEN {
            return Err(invalid("sku must be at most 100 characters"));
        }
        if self.manufacturer.is_empty() {
            return Err(invalid("manufacturer is required"));
        }
        if self.manufacturer.chars().count() > MAX_MANUFACTURER_LEN {
            return Err(invalid("manufacturer must be at most 200 characters"));
        }
        if self.category_id < 1 {
            return Err(invalid("category_id must be positive"));
        }
        if self.weight < 0 {
            return Err(invalid("weight cannot be negative"));
        }
        if self.some_other_id < 1 {
            return Err(invalid("some_other_id must be positive"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> CatalogError {
    CatalogError::InvalidProduct(reason.to_string())
}

#[cfg(test)]
pub(crate) fn sample(id: i64) -> Product {
    Product {
        product_id: ProductId::new(id),
        sku: "ABC-123-XYZ".to_string(),
        manufacturer: "Acme Corporation".to_string(),
        category_id: 456,
        weight: 1250,
        some_other_id: 789,
    }
}
