//! Cart workflow and its collaborator ports.

mod commands;
mod ports;
mod service;

pub use commands::{AddItem, Checkout, CreateCart};
pub use ports::{InMemoryProductLookup, OrderPlacement, ProductLookup, SyntheticOrderPlacement};
pub use service::{CartService, CheckoutReceipt};
