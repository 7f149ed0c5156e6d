//! # Framework Errors
//!
//! Errors raised by the plumbing between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).
//!
//! A failed fetch is *not* a framework error: it is folded into the
//! [`ResourceState::Error`](crate::ResourceState::Error) phase and rendered like any other state.

/// Errors that can occur within the resource framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Resource actor closed")]
    ActorClosed,
    #[error("Resource actor dropped response channel")]
    ActorDropped,
}
