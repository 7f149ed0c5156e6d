//! # Mock Framework & Testing Guide
//!
//! Utilities for testing code that drives a resource (navigation, screen wrappers)
//! without spawning a real `ResourceActor` or touching the network.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock | Real Actor |
//! |---------|------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | Whatever you `publish` | Real lifecycle transitions |
//! | **Use Case** | Asserting *which key* was requested | Testing the lifecycle itself |
//!
//! ## Pattern 0: Raw receiver
//!
//! [`create_mock_client`] hands back the receiving end of the request channel. The test
//! plays the actor: it pulls requests with [`expect_load`] and friends and answers them.
//!
//! ```rust
//! use resource_framework::mock::{create_mock_client, expect_load};
//! use resource_framework::{FetchFailure, RemoteResource};
//! use async_trait::async_trait;
//!
//! struct Item;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ItemError;
//!
//! #[async_trait]
//! impl RemoteResource for Item {
//!     type Key = u32; type Output = String; type Context = (); type Error = ItemError;
//!     async fn fetch(_: &u32, _: &()) -> Result<String, ItemError> { Err(ItemError) }
//!     fn describe_failure(_: &ItemError) -> FetchFailure { FetchFailure::http("Err") }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut requests, _state) = create_mock_client::<Item>(4);
//!     let load = tokio::spawn(async move { client.load(7).await });
//!
//!     let (key, respond_to) = expect_load(&mut requests).await.expect("Expected Load request");
//!     assert_eq!(key, 7);
//!     respond_to.send(Ok(1)).unwrap();
//!
//!     assert_eq!(load.await.unwrap(), Ok(1));
//! }
//! ```
//!
//! ## Pattern 1: Fluent expectations
//!
//! [`MockClient`] answers requests from a queue of expectations and records the keys
//! it was asked to load. Use [`MockClient::publish`] to choose what a view renders.

use crate::client::ResourceClient;
use crate::entity::RemoteResource;
use crate::error::FrameworkError;
use crate::message::{Response, ResourceRequest};
use crate::state::{ResourceSnapshot, ResourceState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<R: RemoteResource> {
    Load {
        response: Result<u64, FrameworkError>,
    },
    Snapshot {
        response: Result<ResourceSnapshot<R>, FrameworkError>,
    },
    Unmount {
        response: Result<(), FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<ProductDetail>::new();
/// mock.expect_load().return_ok(1);
///
/// let client = mock.client();
/// client.load(ProductId(7)).await?;
/// assert_eq!(mock.loaded_keys(), vec![ProductId(7)]);
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<R: RemoteResource> {
    client: ResourceClient<R>,
    publisher: watch::Sender<ResourceState<R::Output>>,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
    loaded: Arc<Mutex<Vec<R::Key>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: RemoteResource> MockClient<R> {
    /// Creates a new mock client with no expectations, publishing `Loading`.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<R>>(100);
        let (publisher, state) = watch::channel(ResourceState::Loading);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let loaded = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let loaded_clone = loaded.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Load { key, respond_to },
                        Some(Expectation::Load { response }),
                    ) => {
                        loaded_clone.lock().unwrap().push(key);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Unmount { respond_to },
                        Some(Expectation::Unmount { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender, state),
            publisher,
            expectations,
            loaded,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<R> {
        self.client.clone()
    }

    /// Expects a `load` request.
    pub fn expect_load(&mut self) -> ExpectationBuilder<R, u64> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Load {
            response,
        })
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<R, ResourceSnapshot<R>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Snapshot { response }
        })
    }

    /// Expects an `unmount` request.
    pub fn expect_unmount(&mut self) -> ExpectationBuilder<R, ()> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Unmount { response }
        })
    }

    /// Makes every client of this mock observe `state`.
    pub fn publish(&self, state: ResourceState<R::Output>) {
        self.publisher.send_replace(state);
    }

    /// Keys received by `load`, in order.
    pub fn loaded_keys(&self) -> Vec<R::Key> {
        self.loaded.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<R: RemoteResource> Default for MockClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<R: RemoteResource, T> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
    wrap: fn(Result<T, FrameworkError>) -> Expectation<R>,
}

impl<R: RemoteResource, T> ExpectationBuilder<R, T> {
    fn new(
        expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
        wrap: fn(Result<T, FrameworkError>) -> Expectation<R>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(response));
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The returned watch sender drives what [`ResourceClient::state`] reports.
pub fn create_mock_client<R: RemoteResource>(
    buffer_size: usize,
) -> (
    ResourceClient<R>,
    mpsc::Receiver<ResourceRequest<R>>,
    watch::Sender<ResourceState<R::Output>>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (publisher, state) = watch::channel(ResourceState::Loading);
    (ResourceClient::new(sender, state), receiver, publisher)
}

/// Helper to verify that the next message is a Load request
pub async fn expect_load<R: RemoteResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<R>>,
) -> Option<(R::Key, Response<u64>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Load { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<R: RemoteResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<R>>,
) -> Option<Response<ResourceSnapshot<R>>> {
    match receiver.recv().await {
        Some(ResourceRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Unmount request
pub async fn expect_unmount<R: RemoteResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<R>>,
) -> Option<Response<()>> {
    match receiver.recv().await {
        Some(ResourceRequest::Unmount { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchFailure;
    use async_trait::async_trait;

    struct Echo;

    #[derive(Debug, thiserror::Error)]
    #[error("echo failed")]
    struct EchoError;

    #[async_trait]
    impl RemoteResource for Echo {
        type Key = u32;
        type Output = u32;
        type Context = ();
        type Error = EchoError;

        async fn fetch(key: &u32, _ctx: &()) -> Result<u32, EchoError> {
            Ok(*key)
        }

        fn describe_failure(_error: &EchoError) -> FetchFailure {
            FetchFailure::network("echo failed")
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver, publisher) = create_mock_client::<Echo>(4);

        let load_task = tokio::spawn({
            let client = client.clone();
            async move { client.load(3).await }
        });

        let (key, responder) = expect_load(&mut receiver)
            .await
            .expect("Expected Load request");
        assert_eq!(key, 3);
        responder.send(Ok(1)).unwrap();
        assert_eq!(load_task.await.unwrap(), Ok(1));

        publisher.send_replace(ResourceState::Ready(3));
        assert_eq!(client.state(), ResourceState::Ready(3));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Echo>::new();
        mock.expect_load().return_ok(1);
        mock.expect_load().return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        assert_eq!(client.load(10).await, Ok(1));
        assert_eq!(client.load(11).await, Err(FrameworkError::ActorClosed));

        assert_eq!(mock.loaded_keys(), vec![10, 11]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_snapshot_and_unmount() {
        let (client, mut receiver, _publisher) = create_mock_client::<Echo>(4);

        let task = tokio::spawn({
            let client = client.clone();
            async move {
                let snapshot = client.snapshot().await;
                let unmounted = client.unmount().await;
                (snapshot, unmounted)
            }
        });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        responder
            .send(Ok(ResourceSnapshot {
                generation: 3,
                key: Some(5),
                state: ResourceState::Ready(5),
                stale_discarded: 1,
            }))
            .unwrap();
        let responder = expect_unmount(&mut receiver)
            .await
            .expect("Expected Unmount request");
        responder.send(Ok(())).unwrap();

        let (snapshot, unmounted) = task.await.unwrap();
        let snapshot = snapshot.unwrap();
        assert_eq!(snapshot.generation, 3);
        assert_eq!(snapshot.key, Some(5));
        assert_eq!(snapshot.state, ResourceState::Ready(5));
        assert_eq!(snapshot.stale_discarded, 1);
        assert_eq!(unmounted, Ok(()));
    }

    #[tokio::test]
    async fn test_mock_client_snapshot_expectation() {
        let mut mock = MockClient::<Echo>::new();
        mock.expect_snapshot().return_ok(ResourceSnapshot {
            generation: 2,
            key: Some(8),
            state: ResourceState::Loading,
            stale_discarded: 0,
        });
        mock.expect_snapshot().return_err(FrameworkError::ActorDropped);

        let client = mock.client();
        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.key, Some(8));
        assert!(snapshot.state.is_loading());
        assert_eq!(
            client.snapshot().await.unwrap_err(),
            FrameworkError::ActorDropped
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_subscriber_sees_each_transition() {
        let mock = MockClient::<Echo>::new();
        let mut updates = mock.client().subscribe();

        mock.publish(ResourceState::Ready(1));
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), ResourceState::Ready(1));

        mock.publish(ResourceState::Loading);
        updates.changed().await.unwrap();
        assert!(updates.borrow_and_update().is_loading());
    }

    #[tokio::test]
    async fn test_publish_drives_settled() {
        let mock = MockClient::<Echo>::new();
        let client = mock.client();
        assert!(client.state().is_loading());

        mock.publish(ResourceState::Error(FetchFailure::http("Something went wrong")));
        let settled = client.settled().await.unwrap();
        assert_eq!(settled.error_message(), Some("Something went wrong"));
    }
}
