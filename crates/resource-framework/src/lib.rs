//! # Resource Framework
//!
//! This crate implements the fetch-and-render lifecycle shared by every screen that shows
//! remote data: a resource is requested, its tri-state result (loading / error / ready) is
//! derived, and a view renders whichever state it is in.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`RemoteResource`]) - what to fetch, for which key, and how a
//!    failure reads to the user
//! 2. **Runtime Layer** ([`ResourceActor`]) - one task per mounted instance that owns its
//!    [`ResourceState`] and applies transitions sequentially
//! 3. **Interface Layer** ([`ResourceClient`], [`ResourceView`]) - what a screen holds
//!
//! ## Lifecycle
//!
//! - A mounted instance starts in `Loading`.
//! - `load(key)` issues exactly one fetch for `key`. Loading the current key again is a
//!   no-op.
//! - The fetch resolves the instance to `Ready(data)` or `Error(failure)`. Any failure
//!   (transport, non-2xx, malformed payload) becomes the `Error` phase; nothing is thrown
//!   past the fetch boundary.
//! - A new key re-initialises to `Loading` and issues a new fetch. The previous fetch is
//!   not cancelled, but its result is compared against the current generation and
//!   discarded.
//! - After unmount no result is ever applied.
//!
//! ```rust
//! use resource_framework::{FetchFailure, RemoteResource, ResourceActor, ResourceState};
//! use async_trait::async_trait;
//!
//! struct Square;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("negative input")]
//! struct SquareError;
//!
//! #[async_trait]
//! impl RemoteResource for Square {
//!     type Key = i64;
//!     type Output = i64;
//!     type Context = ();
//!     type Error = SquareError;
//!
//!     async fn fetch(key: &i64, _: &()) -> Result<i64, SquareError> {
//!         if *key < 0 { Err(SquareError) } else { Ok(key * key) }
//!     }
//!
//!     fn describe_failure(error: &SquareError) -> FetchFailure {
//!         FetchFailure::parse(error.to_string())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mounted = ResourceActor::<Square>::mount(8, (), 12).await.unwrap();
//!     let state = mounted.client().settled().await.unwrap();
//!     assert_eq!(state, ResourceState::Ready(144));
//!
//!     mounted.client().load(-1).await.unwrap();
//!     let state = mounted.client().settled().await.unwrap();
//!     assert_eq!(state.error_message(), Some("negative input"));
//!
//!     mounted.unmount().await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for clients that record requested keys without spawning an
//! actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{MountedResource, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ResourceView;
pub use entity::RemoteResource;
pub use error::FrameworkError;
pub use message::{Completion, ResourceRequest, Response};
pub use state::{FailureKind, FetchFailure, Phase, ResourceSnapshot, ResourceState};
