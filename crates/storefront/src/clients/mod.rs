//! # Clients
//!
//! Two kinds of client live here:
//!
//! - The [`Catalog`] seam in front of the remote product service, with the
//!   [`HttpCatalog`] implementation and a [`MockCatalog`] for tests.
//! - Screen wrappers ([`ProductListClient`], [`ProductDetailClient`]) around the generic
//!   [`ResourceClient`](resource_framework::ResourceClient) of each mounted resource.

pub mod catalog;
pub mod error;
pub mod http;
pub mod mock;
pub mod product_detail_client;
pub mod product_list_client;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use http::HttpCatalog;
pub use mock::MockCatalog;
pub use product_detail_client::ProductDetailClient;
pub use product_list_client::ProductListClient;
