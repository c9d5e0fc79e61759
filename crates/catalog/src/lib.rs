//! Product catalog for the shopping cart system.
//!
//! The catalog is a plain keyed upsert/read store. The cart workflow only
//! consumes it through [`domain::ProductLookup`], which
//! [`InMemoryProductCatalog`] implements.

pub mod error;
pub mod memory;
pub mod product;
pub mod service;

pub use error::CatalogError;
pub use memory::InMemoryProductCatalog;
pub use product::Product;
pub use service::CatalogService;
