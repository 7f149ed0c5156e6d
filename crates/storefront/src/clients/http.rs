//! HTTP implementation of [`Catalog`].

use crate::clients::{Catalog, CatalogError};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, instrument};
use url::Url;

/// Catalog backed by the REST service at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(base_url: Url, user_agent: &str) -> Result<Self, CatalogError> {
        let http_client = HttpClient::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http_client,
            base_url: with_trailing_slash(base_url),
        })
    }

    /// Create a catalog from a base URL string
    pub fn from_url(base_url: &str, user_agent: &str) -> Result<Self, CatalogError> {
        Self::new(Url::parse(base_url)?, user_agent)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues a GET and returns the body of a 2xx response.
    async fn get_body(&self, path: &str) -> Result<String, CatalogError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "GET");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Non-success status");
            return Err(CatalogError::Http {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let body = self.get_body("products").await?;
        Ok(serde_json::from_str(&body)?)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let body = self.get_body(&format!("products/{id}")).await?;
        let body = body.trim();
        if body.is_empty() {
            return Err(CatalogError::NotFound(id));
        }
        // The public catalog answers unknown ids with `200 null`.
        serde_json::from_str::<Option<Product>>(body)?.ok_or(CatalogError::NotFound(id))
    }
}

// `Url::join` replaces the last segment unless the base ends with '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_resolve_under_base_path() {
        let catalog = HttpCatalog::from_url("https://example.com/api", "test").unwrap();
        assert_eq!(catalog.base_url().as_str(), "https://example.com/api/");
        assert_eq!(
            catalog.base_url().join("products/7").unwrap().as_str(),
            "https://example.com/api/products/7"
        );

        let catalog = HttpCatalog::from_url("https://fakestoreapi.com", "test").unwrap();
        assert_eq!(
            catalog.base_url().join("products").unwrap().as_str(),
            "https://fakestoreapi.com/products"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpCatalog::from_url("not a url", "test").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidUrl(_)));
    }
}
