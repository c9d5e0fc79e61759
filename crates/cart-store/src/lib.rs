pub mod cart;
pub mod error;
pub mod memory;
pub mod store;

pub use cart::{Cart, CartItem};
pub use common::{CartId, CustomerId, ProductId};
pub use error::{Result, StoreError};
pub use memory::InMemoryCartStore;
pub use store::CartStore;
