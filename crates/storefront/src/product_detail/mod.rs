//! # Product Detail
//!
//! The detail screen: fetches a single product by the id carried in its route and
//! renders every field of the fetched record.
//!
//! The resource is keyed by [`ProductId`]. Entering a route with a different id
//! re-initialises it to `Loading` and issues a new fetch; a result for the previous id
//! that arrives afterwards is discarded by the actor. Entering the same id again is a
//! no-op.
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteResource`](resource_framework::RemoteResource) implementation for [`ProductDetail`]
//! - [`error`] - [`ProductDetailError`] type for the screen client
//! - [`view`] - [`DetailView`], what the screen renders

pub mod entity;
pub mod error;
pub mod view;

pub use entity::*;
pub use error::*;
pub use view::*;

use crate::clients::Catalog;
use crate::model::ProductId;
use resource_framework::{MountedResource, ResourceActor, ResourceClient};
use std::sync::Arc;

const BUFFER_SIZE: usize = 32;

/// Creates a new ProductDetail actor and its client.
pub fn new() -> (ResourceActor<ProductDetail>, ResourceClient<ProductDetail>) {
    ResourceActor::new(BUFFER_SIZE)
}

/// Spawns the actor and issues the fetch for `id`.
pub async fn mount(
    catalog: Arc<dyn Catalog>,
    id: ProductId,
) -> Result<MountedResource<ProductDetail>, ProductDetailError> {
    ResourceActor::<ProductDetail>::mount(BUFFER_SIZE, catalog, id)
        .await
        .map_err(|e| ProductDetailError::ActorCommunicationError(e.to_string()))
}
