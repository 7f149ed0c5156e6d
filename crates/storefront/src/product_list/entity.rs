//! RemoteResource implementation for the product collection.

use crate::clients::{Catalog, CatalogError};
use crate::model::Product;
use async_trait::async_trait;
use resource_framework::{FetchFailure, RemoteResource};
use std::sync::Arc;

/// Message shown when the collection endpoint answers with a non-2xx status.
pub const LIST_FAILED_MESSAGE: &str = "Something went wrong";

/// The full product collection. There is no key: the list is fetched once per mount.
pub struct ProductList;

#[async_trait]
impl RemoteResource for ProductList {
    type Key = ();
    type Output = Vec<Product>;
    type Context = Arc<dyn Catalog>;
    type Error = CatalogError;

    async fn fetch(_key: &(), catalog: &Arc<dyn Catalog>) -> Result<Vec<Product>, CatalogError> {
        catalog.list_products().await
    }

    fn describe_failure(error: &CatalogError) -> FetchFailure {
        let message = match error {
            CatalogError::Http { .. } => LIST_FAILED_MESSAGE.to_string(),
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
    fn test_http_failure_uses_generic_message() {
        let failure = ProductList::describe_failure(&CatalogError::Http { status: 503 });
        assert_eq!(failure, FetchFailure::http("Something went wrong"));
    }

    #[test]
    fn test_other_failures_pass_their_message_through() {
        let error = CatalogError::Network("connection refused".to_string());
        let failure = ProductList::describe_failure(&error);
        assert_eq!(failure.kind, FailureKind::Network);
        assert_eq!(failure.message, error.to_string());
    }
}
