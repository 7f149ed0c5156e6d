//! Error types for the product list screen.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while driving the product list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductListError {
    /// The list has not loaded (still fetching, or the fetch failed).
    #[error("Product list is not ready")]
    NotReady,

    /// The selected product is not part of the loaded list.
    #[error("Product not in list: {0}")]
    UnknownProduct(ProductId),

    /// An error occurred while communicating with the resource actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductListError {
    fn from(msg: String) -> Self {
        ProductListError::ActorCommunicationError(msg)
    }
}
