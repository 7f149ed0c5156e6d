//! # Product Detail Client
//!
//! Screen-level API over the `ProductDetail` resource. Entering a route issues the
//! load for the route's id; everything the screen shows comes from that fetch.
use crate::model::ProductId;
use crate::navigation::Route;
use crate::product_detail::{DetailView, ProductDetail, ProductDetailError};
use async_trait::async_trait;
use resource_framework::{FrameworkError, ResourceClient, ResourceView};
use tracing::{debug, instrument};

/// Client for the product detail screen.
#[derive(Clone)]
pub struct ProductDetailClient {
    inner: ResourceClient<ProductDetail>,
}

impl ProductDetailClient {
    pub fn new(inner: ResourceClient<ProductDetail>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceView<ProductDetail> for ProductDetailClient {
    type Error = ProductDetailError;

    fn inner(&self) -> &ResourceClient<ProductDetail> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductDetailError::ActorCommunicationError(e.to_string())
    }
}

impl ProductDetailClient {
    /// Initialises the screen from a route. Only the route's id is used.
    ///
    /// Returns the generation of the fetch that now backs the screen.
    #[instrument(skip(self))]
    pub async fn enter(&self, route: &Route) -> Result<u64, ProductDetailError> {
        match route.product_id() {
            Some(id) => self.load(id).await,
            None => Err(ProductDetailError::NotADetailRoute(*route)),
        }
    }

    /// (Re)keys the screen to `id`. A no-op when `id` is already the current key.
    #[instrument(skip(self))]
    pub async fn load(&self, id: ProductId) -> Result<u64, ProductDetailError> {
        debug!("Sending request");
        self.inner
            .load(id)
            .await
            .map_err(|e| ProductDetailError::ActorCommunicationError(e.to_string()))
    }

    pub fn view(&self) -> DetailView {
        DetailView::from_state(&self.state())
    }

    #[instrument(skip(self))]
    pub async fn settled_view(&self) -> Result<DetailView, ProductDetailError> {
        let state = self.settled().await?;
        Ok(DetailView::from_state(&state))
    }
}
