use serde::{Deserialize, Serialize};

/// Declares a transparent integer identifier.
///
/// Identifiers carry the raw `i64` received from callers so that range
/// checks (`>= 1`) happen in the workflow layer rather than at decode time.
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw integer value.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw integer value.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }

            /// Returns true if the identifier is in the valid range (`>= 1`).
            pub const fn is_valid(&self) -> bool {
                self.0 >= 1
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

integer_id!(
    /// Identifier of a shopping cart, assigned by the cart store.
    ///
    /// Strictly increasing from 1 and never reused, even after checkout.
    CartId
);

integer_id!(
    /// Identifier of the customer owning a cart.
    CustomerId
);

integer_id!(
    /// Identifier of a catalog product.
    ProductId
);

integer_id!(
    /// Identifier of the order produced by a successful checkout.
    OrderId
);

impl CartId {
    /// The first identifier handed out by an empty store.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Returns the identifier following this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}
