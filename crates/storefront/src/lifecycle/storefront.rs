use crate::clients::{Catalog, HttpCatalog, ProductDetailClient, ProductListClient};
use crate::lifecycle::{StorefrontConfig, StorefrontError};
use crate::model::ProductId;
use crate::navigation::{Navigator, Route};
use crate::product_detail::{self, ProductDetail};
use crate::product_list::{self, ProductList};
use resource_framework::MountedResource;
use std::sync::Arc;
use tracing::{debug, info};

struct DetailScreen {
    resource: MountedResource<ProductDetail>,
    client: ProductDetailClient,
}

/// The storefront app: the list screen, the detail screen and the navigator between
/// them.
///
/// # Example
///
/// ```ignore
/// let mut app = Storefront::start(&StorefrontConfig::from_env()?).await?;
/// println!("{}", app.settled_render().await?);
///
/// app.select(ProductId(7)).await?;   // detail screen for product 7
/// println!("{}", app.settled_render().await?);
///
/// app.back().await?;                 // detail resource unmounted
/// app.shutdown().await?;
/// ```
pub struct Storefront {
    catalog: Arc<dyn Catalog>,
    navigator: Navigator,
    list: MountedResource<ProductList>,
    list_client: ProductListClient,
    detail: Option<DetailScreen>,
}

impl Storefront {
    /// Starts the app against the HTTP catalog described by `config`.
    pub async fn start(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = HttpCatalog::new(config.base_url.clone(), &config.user_agent)?;
        info!(base_url = %config.base_url, "Catalog configured");
        Self::with_catalog(Arc::new(catalog)).await
    }

    /// Starts the app against any catalog. The list screen is mounted immediately.
    pub async fn with_catalog(catalog: Arc<dyn Catalog>) -> Result<Self, StorefrontError> {
        let list = product_list::mount(catalog.clone()).await?;
        let list_client = ProductListClient::new(list.client().clone());
        info!("Storefront started");

        Ok(Self {
            catalog,
            navigator: Navigator::new(),
            list,
            list_client,
            detail: None,
        })
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn list(&self) -> &ProductListClient {
        &self.list_client
    }

    /// The detail screen client, while a detail route is shown.
    pub fn detail(&self) -> Option<&ProductDetailClient> {
        self.detail.as_ref().map(|d| &d.client)
    }

    /// Activates the list card for `id` and opens its detail screen.
    pub async fn select(&mut self, id: ProductId) -> Result<Route, StorefrontError> {
        let card = self.list_client.card(id)?;
        let route = self.navigator.select(&card);
        self.show(route).await?;
        Ok(route)
    }

    /// Opens `route` directly, e.g. from a deep link.
    pub async fn navigate(&mut self, route: Route) -> Result<(), StorefrontError> {
        let route = self.navigator.push(route);
        self.show(route).await
    }

    /// Pops the current route and returns the one now shown.
    pub async fn back(&mut self) -> Result<Route, StorefrontError> {
        let route = self.navigator.back().unwrap_or(Route::ProductList);
        self.show(route).await?;
        Ok(route)
    }

    async fn show(&mut self, route: Route) -> Result<(), StorefrontError> {
        let Some(id) = route.product_id() else {
            return self.close_detail().await;
        };

        match &self.detail {
            Some(screen) => {
                let generation = screen.client.enter(&route).await?;
                debug!(%id, generation, "Detail screen re-keyed");
            }
            None => {
                let resource = product_detail::mount(self.catalog.clone(), id).await?;
                let client = ProductDetailClient::new(resource.client().clone());
                info!(%id, "Detail screen mounted");
                self.detail = Some(DetailScreen { resource, client });
            }
        }
        Ok(())
    }

    async fn close_detail(&mut self) -> Result<(), StorefrontError> {
        if let Some(screen) = self.detail.take() {
            screen.resource.unmount().await?;
            info!("Detail screen unmounted");
        }
        Ok(())
    }

    /// The current screen as text, whatever its phase.
    pub fn render(&self) -> String {
        match (&self.detail, self.route()) {
            (Some(screen), Route::ProductDetail { .. }) => screen.client.view().to_string(),
            _ => self.list_client.view().to_string(),
        }
    }

    /// The current screen as text once its fetch resolved.
    pub async fn settled_render(&self) -> Result<String, StorefrontError> {
        match (&self.detail, self.route()) {
            (Some(screen), Route::ProductDetail { .. }) => {
                Ok(screen.client.settled_view().await?.to_string())
            }
            _ => Ok(self.list_client.settled_view().await?.to_string()),
        }
    }

    /// Unmounts every screen and waits for the resource tasks to finish.
    pub async fn shutdown(mut self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");
        self.close_detail().await?;
        drop(self.list_client);
        self.list.unmount().await?;
        info!("Storefront shutdown complete.");
        Ok(())
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("route", &self.route())
            .field("detail_mounted", &self.detail.is_some())
            .finish()
    }
}
