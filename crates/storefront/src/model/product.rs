/// A product record as served by the remote catalog.
///
/// Records are owned by the catalog service and never modified locally; both
/// screens deserialise them straight from the JSON payload.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Type-safe identifier for Products. Also the navigation key of the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Route parameters arrive as text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid product id: {0:?}")]
pub struct InvalidProductId(pub String);

impl FromStr for ProductId {
    type Err = InvalidProductId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ProductId)
            .map_err(|_| InvalidProductId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, nominally in `[0, 5]`.
    pub rate: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    /// Only shown on the detail screen.
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// URI of the externally hosted image.
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}
