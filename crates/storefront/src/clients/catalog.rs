use crate::clients::CatalogError;
use crate::model::{Product, ProductId};
use async_trait::async_trait;

/// Read-only access to the remote product catalog.
///
/// The resources receive an `Arc<dyn Catalog>` as their context, so tests can swap the
/// HTTP implementation for [`MockCatalog`](crate::clients::MockCatalog).
#[async_trait]
pub trait Catalog: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;
}
