//! Error types for the product detail screen.

use crate::navigation::Route;
use thiserror::Error;

/// Errors that can occur while driving the product detail screen.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductDetailError {
    /// The route does not carry a product id.
    #[error("Not a product detail route: {0}")]
    NotADetailRoute(Route),

    /// An error occurred while communicating with the resource actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductDetailError {
    fn from(msg: String) -> Self {
        ProductDetailError::ActorCommunicationError(msg)
    }
}
