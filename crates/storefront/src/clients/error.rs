//! Error types for catalog access.

use crate::model::ProductId;
use resource_framework::FailureKind;
use thiserror::Error;

/// Errors that can occur while fetching from the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The request could not reach the server.
    #[error("Network request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Unexpected HTTP status {status}")]
    Http { status: u16 },

    /// The body did not match the expected shape.
    #[error("Malformed catalog payload: {0}")]
    Parse(String),

    /// The single-item endpoint answered 2xx with an empty body.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The endpoint URL could not be built from the base URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

impl CatalogError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::Network(_) | CatalogError::InvalidUrl(_) => FailureKind::Network,
            CatalogError::Http { .. } => FailureKind::Http,
            CatalogError::Parse(_) | CatalogError::NotFound(_) => FailureKind::Parse,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => CatalogError::Http {
                status: status.as_u16(),
            },
            None => CatalogError::Network(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(e: url::ParseError) -> Self {
        CatalogError::InvalidUrl(e.to_string())
    }
}
