//! RemoteResource implementation for a single product.

use crate::clients::{Catalog, CatalogError};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use resource_framework::{FetchFailure, RemoteResource};
use std::sync::Arc;

/// Message shown when the item endpoint answers with a non-2xx status.
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch product details";
/// Message shown when the item endpoint answers without a product.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// One product, keyed by its id.
pub struct ProductDetail;

#[async_trait]
impl RemoteResource for ProductDetail {
    type Key = ProductId;
    type Output = Product;
    type Context = Arc<dyn Catalog>;
    type Error = CatalogError;

    async fn fetch(id: &ProductId, catalog: &Arc<dyn Catalog>) -> Result<Product, CatalogError> {
        catalog.get_product(*id).await
    }

    fn describe_failure(error: &CatalogError) -> FetchFailure {
        let message = match error {
            CatalogError::Http { .. } => DETAIL_FAILED_MESSAGE.to_string(),
            CatalogError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            other => other.to_string(),
        };
        FetchFailure::new(error.kind(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::FailureKind;

    #[test]
    fn test_failure_messages() {
        let http = ProductDetail::describe_failure(&CatalogError::Http { status: 404 });
        assert_eq!(http, FetchFailure::http("Failed to fetch product details"));

        let missing = ProductDetail::describe_failure(&CatalogError::NotFound(ProductId(99)));
        assert_eq!(missing.kind, FailureKind::Parse);
        assert_eq!(missing.message, "Product not found");

        let parse = ProductDetail::describe_failure(&CatalogError::Parse("eof".to_string()));
        assert_eq!(parse.message, "Malformed catalog payload: eof");
    }
}
