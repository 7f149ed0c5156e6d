//! # Product List Client
//!
//! Screen-level API over the `ProductList` resource. It wraps a
//! `ResourceClient<ProductList>` and turns its state into a [`ListView`].
use crate::model::ProductId;
use crate::product_list::{ListView, ProductCard, ProductList, ProductListError};
use async_trait::async_trait;
use resource_framework::{FrameworkError, ResourceClient, ResourceView};
use tracing::instrument;

/// Client for the product list screen.
#[derive(Clone)]
pub struct ProductListClient {
    inner: ResourceClient<ProductList>,
}

impl ProductListClient {
    pub fn new(inner: ResourceClient<ProductList>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceView<ProductList> for ProductListClient {
    type Error = ProductListError;

    fn inner(&self) -> &ResourceClient<ProductList> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductListError::ActorCommunicationError(e.to_string())
    }
}

impl ProductListClient {
    /// The screen as it should be drawn right now.
    pub fn view(&self) -> ListView {
        ListView::from_state(&self.state())
    }

    /// The screen once the fetch resolved.
    #[instrument(skip(self))]
    pub async fn settled_view(&self) -> Result<ListView, ProductListError> {
        let state = self.settled().await?;
        Ok(ListView::from_state(&state))
    }

    /// The card for `id`, if the list is loaded and contains it.
    pub fn card(&self, id: ProductId) -> Result<ProductCard, ProductListError> {
        match self.view() {
            ListView::Cards(cards) => cards
                .into_iter()
                .find(|c| c.id == id)
                .ok_or(ProductListError::UnknownProduct(id)),
            _ => Err(ProductListError::NotReady),
        }
    }
}
