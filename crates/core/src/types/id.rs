//! Product identifier.
//!
//! Catalog entries are numbered from 1 in display order. The id is its own
//! type so a quantity or a list position can't be passed where an id is
//! expected.

use serde::{Deserialize, Serialize};

/// Error returned when text is not a product id.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid product id: {0:?}")]
pub struct InvalidProductId(pub String);

/// A 1-based product identifier as shown in the catalog listing.
///
/// ```rust
/// use order_desk_core::ProductId;
///
/// let id: ProductId = " 3 ".parse().unwrap();
/// assert_eq!(id, ProductId::new(3));
/// assert_eq!(id.to_string(), "3");
/// assert!("three".parse::<ProductId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID from a u32 value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl ::core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = InvalidProductId;

    /// Parses a decimal id, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| InvalidProductId(s.to_owned()))
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
