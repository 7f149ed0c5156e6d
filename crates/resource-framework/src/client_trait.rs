//! # ResourceView Trait
//!
//! Provides a common interface for screen-specific clients, adding default `state`,
//! `settled` and `unmount` methods built on top of a generic `ResourceClient`.
use crate::{FrameworkError, RemoteResource, ResourceClient, ResourceState};
use async_trait::async_trait;

/// Trait for screen-specific clients to inherit the standard lifecycle reads.
///
/// # Example
///
/// ```rust
/// use resource_framework::{FetchFailure, FrameworkError, RemoteResource, ResourceClient, ResourceView};
/// use async_trait::async_trait;
///
/// struct Greeting;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("unreachable")]
/// struct GreetingError;
///
/// #[async_trait]
/// impl RemoteResource for Greeting {
///     type Key = String;
///     type Output = String;
///     type Context = ();
///     type Error = GreetingError;
///
///     async fn fetch(key: &String, _: &()) -> Result<String, GreetingError> {
///         Ok(format!("hello {key}"))
///     }
///
///     fn describe_failure(error: &GreetingError) -> FetchFailure {
///         FetchFailure::network(error.to_string())
///     }
/// }
///
/// #[derive(Debug)]
/// struct ScreenError(String);
/// impl From<String> for ScreenError {
///     fn from(s: String) -> Self { ScreenError(s) }
/// }
///
/// struct GreetingScreen {
///     inner: ResourceClient<Greeting>,
/// }
///
/// impl ResourceView<Greeting> for GreetingScreen {
///     type Error = ScreenError;
///
///     fn inner(&self) -> &ResourceClient<Greeting> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ScreenError(e.to_string())
///     }
/// }
///
/// async fn usage(screen: GreetingScreen) {
///     // state(), settled() and unmount() are provided automatically!
///     let _ = screen.state();
///     let _ = screen.settled().await;
///     let _ = screen.unmount().await;
/// }
/// ```
#[async_trait]
pub trait ResourceView<R: RemoteResource>: Send + Sync {
    /// The screen-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<R>;

    /// Map framework errors to the screen error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The state to render right now.
    fn state(&self) -> ResourceState<R::Output> {
        self.inner().state()
    }

    /// Wait for the in-flight fetch to resolve.
    #[tracing::instrument(skip(self))]
    async fn settled(&self) -> Result<ResourceState<R::Output>, Self::Error> {
        tracing::debug!("Waiting for fetch to settle");
        self.inner().settled().await.map_err(Self::map_error)
    }

    /// Stop the underlying actor.
    #[tracing::instrument(skip(self))]
    async fn unmount(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().unmount().await.map_err(Self::map_error)
    }
}
