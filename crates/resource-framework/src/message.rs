//! # Generic Messages
//!
//! This module defines the message types exchanged between a `ResourceClient`, its
//! `ResourceActor`, and the fetch tasks the actor spawns.

use crate::entity::RemoteResource;
use crate::error::FrameworkError;
use crate::state::ResourceSnapshot;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent from a client to the actor.
///
/// - **Load**: (Re)initialise the resource for `key`. Answers with the generation of the
///   fetch now in flight; a repeated key answers with the current generation.
/// - **Snapshot**: Read the current generation, key, state and stale counter.
/// - **Unmount**: Stop the actor. Fetches still in flight are left to finish and their
///   results are dropped.
#[derive(Debug)]
pub enum ResourceRequest<R: RemoteResource> {
    Load {
        key: R::Key,
        respond_to: Response<u64>,
    },
    Snapshot {
        respond_to: Response<ResourceSnapshot<R>>,
    },
    Unmount {
        respond_to: Response<()>,
    },
}

/// Outcome of one fetch, tagged with the generation that issued it.
///
/// The actor applies a completion only if `generation` is still current.
#[derive(Debug)]
pub struct Completion<R: RemoteResource> {
    pub generation: u64,
    pub result: Result<R::Output, R::Error>,
}
