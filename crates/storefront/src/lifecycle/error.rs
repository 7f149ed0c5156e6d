//! Error types for the storefront app.

use crate::clients::CatalogError;
use crate::navigation::NavigationError;
use crate::product_detail::ProductDetailError;
use crate::product_list::ProductListError;
use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that stop the app itself. Fetch failures are not among them: they are
/// rendered as the `Error` phase of the screen that issued the fetch.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    ProductList(#[from] ProductListError),

    #[error(transparent)]
    ProductDetail(#[from] ProductDetailError),

    #[error("Resource task failed: {0}")]
    Framework(#[from] FrameworkError),
}
