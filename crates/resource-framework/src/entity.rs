//! # RemoteResource Trait
//!
//! The `RemoteResource` trait is the contract every fetchable resource (a product list,
//! a single product, …) implements to be driven by the generic [`ResourceActor`](crate::ResourceActor).
//! It names the input key, the payload, the injected dependencies and the error type, and
//! supplies the one asynchronous operation the lifecycle needs: `fetch`.
//!
//! # Architecture Note
//! Resources are usually zero-sized marker types. All state lives in the actor, so the
//! same marker can back any number of independent mounted instances (the list screen and
//! two stacked detail screens never share a `ResourceState`).
//!
//! # Context
//! Dependencies such as an HTTP catalog client are not captured at construction time.
//! They are injected through [`ResourceActor::run`](crate::ResourceActor::run) and handed to every
//! `fetch`, the same late binding used for actor hooks.

use crate::state::FetchFailure;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any remote resource must implement to be managed by `ResourceActor`.
#[async_trait]
pub trait RemoteResource: Send + Sync + 'static {
    /// The input that parameterises a fetch: `()` for a collection, an identifier for
    /// a single record. A load with a key equal to the current one issues no request.
    type Key: Clone + PartialEq + Send + Sync + Debug + 'static;

    /// The payload held while `Ready`.
    type Output: Clone + Send + Sync + Debug + 'static;

    /// The runtime dependencies injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// The error a fetch can fail with.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issues the request for `key`. This is the only suspension point of the lifecycle.
    async fn fetch(key: &Self::Key, ctx: &Self::Context) -> Result<Self::Output, Self::Error>;

    /// Folds a fetch error into the failure shown by the view.
    fn describe_failure(error: &Self::Error) -> FetchFailure;
}
