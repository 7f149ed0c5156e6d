use crate::lifecycle::StorefrontError;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
pub const BASE_URL_ENV: &str = "STOREFRONT_BASE_URL";
pub const DEFAULT_USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));

/// Where the catalog lives and how to identify ourselves to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub base_url: Url,
    pub user_agent: String,
}

impl StorefrontConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn from_url(base_url: &str) -> Result<Self, StorefrontError> {
        let url = Url::parse(base_url).map_err(|e| StorefrontError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(url))
    }

    /// Reads `STOREFRONT_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, StorefrontError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, StorefrontError> {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::from_url(url.trim()),
            _ => Self::from_url(DEFAULT_BASE_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url.as_str(), "https://fakestoreapi.com/");
        assert!(config.user_agent.starts_with("storefront/"));
    }

    #[test]
    fn test_env_overrides_base_url() {
        let config = StorefrontConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "http://127.0.0.1:8080".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let config = StorefrontConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.base_url.as_str(), "https://fakestoreapi.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = StorefrontConfig::from_url("::nope").unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidBaseUrl { .. }));
    }
}
