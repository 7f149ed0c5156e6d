//! # Mock Catalog
//!
//! An in-memory [`Catalog`] with expectation tracking, for tests that exercise the real
//! resource actors without a server.
//!
//! ```rust
//! use storefront::clients::{Catalog, MockCatalog};
//! use storefront::model::ProductId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = MockCatalog::new();
//!     catalog.expect_list_products().return_ok(vec![]);
//!     assert!(catalog.list_products().await.unwrap().is_empty());
//!
//!     // Calls without an expectation fail instead of hanging.
//!     assert!(catalog.get_product(ProductId(1)).await.is_err());
//!     assert_eq!(catalog.requested_ids(), vec![ProductId(1)]);
//! }
//! ```
//!
//! A response can be held back with [`CatalogExpectation::wait_for`] so a test decides
//! the order in which concurrent fetches resolve.

use crate::clients::{Catalog, CatalogError};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

struct Expectation<T> {
    id: Option<ProductId>,
    release: Option<oneshot::Receiver<()>>,
    response: Result<T, CatalogError>,
}

#[derive(Default)]
struct Expectations {
    list: VecDeque<Expectation<Vec<Product>>>,
    get: Vec<Expectation<Product>>,
}

/// A mock catalog with expectation tracking for fluent testing.
///
/// `list_products` answers expectations in order; `get_product` answers the first
/// expectation registered for the requested id.
#[derive(Clone, Default)]
pub struct MockCatalog {
    expectations: Arc<Mutex<Expectations>>,
    requested: Arc<Mutex<Vec<ProductId>>>,
    list_calls: Arc<Mutex<usize>>,
    answered: Arc<Mutex<usize>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_products` call.
    pub fn expect_list_products(&self) -> CatalogExpectation<Vec<Product>> {
        CatalogExpectation::new(self.expectations.clone(), None, |exps, e| {
            exps.list.push_back(e)
        })
    }

    /// Expects a `get_product(id)` call.
    pub fn expect_get_product(&self, id: ProductId) -> CatalogExpectation<Product> {
        CatalogExpectation::new(self.expectations.clone(), Some(id), |exps, e| {
            exps.get.push(e)
        })
    }

    /// Ids passed to `get_product`, in call order.
    pub fn requested_ids(&self) -> Vec<ProductId> {
        self.requested.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// Calls that have returned, gated ones only after their release.
    pub fn answered_calls(&self) -> usize {
        *self.answered.lock().unwrap()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        let remaining = exps.list.len() + exps.get.len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        *self.list_calls.lock().unwrap() += 1;
        let expectation = self.expectations.lock().unwrap().list.pop_front();
        let result = match expectation {
            Some(expectation) => expectation.resolve().await,
            None => Err(CatalogError::Network(
                "unexpected list_products call".to_string(),
            )),
        };
        *self.answered.lock().unwrap() += 1;
        result
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.requested.lock().unwrap().push(id);
        let expectation = {
            let mut exps = self.expectations.lock().unwrap();
            exps.get
                .iter()
                .position(|e| e.id == Some(id))
                .map(|index| exps.get.remove(index))
        };
        let result = match expectation {
            Some(expectation) => expectation.resolve().await,
            None => Err(CatalogError::Network(format!(
                "unexpected get_product({id}) call"
            ))),
        };
        *self.answered.lock().unwrap() += 1;
        result
    }
}

impl<T> Expectation<T> {
    async fn resolve(self) -> Result<T, CatalogError> {
        if let Some(release) = self.release {
            // A dropped sender releases the response as well.
            let _ = release.await;
        }
        self.response
    }
}

/// Builder that queues the response for one expected catalog call.
pub struct CatalogExpectation<T> {
    expectations: Arc<Mutex<Expectations>>,
    id: Option<ProductId>,
    release: Option<oneshot::Receiver<()>>,
    push: fn(&mut Expectations, Expectation<T>),
}

impl<T> CatalogExpectation<T> {
    fn new(
        expectations: Arc<Mutex<Expectations>>,
        id: Option<ProductId>,
        push: fn(&mut Expectations, Expectation<T>),
    ) -> Self {
        Self {
            expectations,
            id,
            release: None,
            push,
        }
    }

    /// Holds the response back until `release` fires (or its sender is dropped).
    pub fn wait_for(mut self, release: oneshot::Receiver<()>) -> Self {
        self.release = Some(release);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.finish(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        self.finish(Err(error));
    }

    fn finish(self, response: Result<T, CatalogError>) {
        let expectation = Expectation {
            id: self.id,
            release: self.release,
            response,
        };
        let mut exps = self.expectations.lock().unwrap();
        (self.push)(&mut *exps, expectation);
    }
}
