//! # Product List
//!
//! The listing screen: fetches the whole collection once, renders each product as a
//! card and hands the id of a selected card to navigation.
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteResource`](resource_framework::RemoteResource) implementation for [`ProductList`]
//! - [`error`] - [`ProductListError`] type for the screen client
//! - [`view`] - [`ListView`] and [`ProductCard`], what the screen renders
//! - [`mount()`] - spawns the actor and issues the one fetch
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront::clients::{MockCatalog, ProductListClient};
//! use storefront::product_list::{self, ListView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = MockCatalog::new();
//!     catalog.expect_list_products().return_ok(vec![]);
//!
//!     let mounted = product_list::mount(Arc::new(catalog)).await?;
//!     let client = ProductListClient::new(mounted.client().clone());
//!
//!     assert_eq!(client.settled_view().await?, ListView::Cards(vec![]));
//!     mounted.unmount().await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod view;

pub use entity::*;
pub use error::*;
pub use view::*;

use crate::clients::Catalog;
use resource_framework::{MountedResource, ResourceActor};
use std::sync::Arc;

const BUFFER_SIZE: usize = 32;

/// Spawns the actor and issues the one fetch of the collection.
pub async fn mount(
    catalog: Arc<dyn Catalog>,
) -> Result<MountedResource<ProductList>, ProductListError> {
    ResourceActor::<ProductList>::mount(BUFFER_SIZE, catalog, ())
        .await
        .map_err(|e| ProductListError::ActorCommunicationError(e.to_string()))
}
