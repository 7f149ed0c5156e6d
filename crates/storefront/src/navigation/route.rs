use crate::model::{InvalidProductId, ProductId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error(transparent)]
    InvalidId(#[from] InvalidProductId),
}

/// A screen and the parameters it is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    ProductList,
    /// `/product/{id}`
    ProductDetail { id: ProductId },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::ProductList => "/".to_string(),
            Route::ProductDetail { id } => format!("/product/{id}"),
        }
    }

    /// The detail key carried by this route, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Route::ProductDetail { id } => Some(*id),
            Route::ProductList => None,
        }
    }

    /// Parses a path, coercing the `id` segment to a [`ProductId`].
    pub fn parse(path: &str) -> Result<Route, NavigationError> {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::ProductList),
            ["product", id] => Ok(Route::ProductDetail { id: id.parse()? }),
            _ => Err(NavigationError::UnknownRoute(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}
