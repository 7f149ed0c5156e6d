//! # Navigation
//!
//! Routes between the two screens and the back stack that holds them.
//!
//! The only thing a selection carries from the list to the detail screen is the
//! product id. Every field the detail screen shows comes from its own fetch.

pub mod route;

pub use route::*;

use crate::product_list::ProductCard;
use tracing::debug;

/// A back stack rooted at [`Route::ProductList`].
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    // Routes above the root, oldest first.
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::ProductList)
    }

    /// Number of routes on the stack, root included.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Shows `route`. Pushing the route already shown leaves the stack as it is.
    pub fn push(&mut self, route: Route) -> Route {
        if route == self.current() {
            return route;
        }
        debug!(%route, "Navigate");
        if route == Route::ProductList {
            self.stack.clear();
        } else {
            self.stack.push(route);
        }
        route
    }

    /// Opens the detail screen for a card. Only the card's id is handed over.
    pub fn select(&mut self, card: &ProductCard) -> Route {
        self.push(Route::ProductDetail { id: card.id })
    }

    /// Pops the current route. Returns the route now shown, or `None` at the root.
    pub fn back(&mut self) -> Option<Route> {
        self.stack.pop()?;
        let route = self.current();
        debug!(%route, "Back");
        Some(route)
    }
}
