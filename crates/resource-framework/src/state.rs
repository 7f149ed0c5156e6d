//! # Resource State
//!
//! The tri-state result of a fetch, as a view sees it.
//!
//! [`ResourceState`] is a sum type: a value is `Loading`, `Error` or `Ready` and never
//! two of them at once. Payload and error message live inside their variants, so a
//! view can `match` on the state and render every arm without checking flags.

use crate::entity::RemoteResource;
use std::fmt;

/// Discrete lifecycle stage of a fetched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

/// Why a fetch failed.
///
/// The view only renders [`FetchFailure::message`]; the kind is kept so callers and
/// tests can tell the causes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request never reached the server.
    Network,
    /// The server answered with a non-2xx status.
    Http,
    /// The payload did not have the expected shape.
    Parse,
}

/// A fetch failure collapsed into something a view can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Http, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Parse, message)
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// State of one resource instance.
///
/// Created as `Loading` when the resource is mounted and moved to `Ready` or `Error`
/// once per issued fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    Loading,
    Error(FetchFailure),
    Ready(T),
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState::Loading
    }
}

impl<T> ResourceState<T> {
    pub fn phase(&self) -> Phase {
        match self {
            ResourceState::Loading => Phase::Loading,
            ResourceState::Error(_) => Phase::Error,
            ResourceState::Ready(_) => Phase::Ready,
        }
    }

    /// The payload, only while `Ready`.
    pub fn data(&self) -> Option<&T> {
        match self {
            ResourceState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            ResourceState::Error(failure) => Some(failure),
            _ => None,
        }
    }

    /// The human-readable message, only while in the `Error` phase.
    pub fn error_message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResourceState::Loading)
    }

    /// True once the fetch for the current key resolved, either way.
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResourceState<U> {
        match self {
            ResourceState::Loading => ResourceState::Loading,
            ResourceState::Error(failure) => ResourceState::Error(failure),
            ResourceState::Ready(data) => ResourceState::Ready(f(data)),
        }
    }
}

/// Point-in-time read of a resource actor, for diagnostics and tests.
pub struct ResourceSnapshot<R: RemoteResource> {
    /// Generation of the most recently issued fetch. `0` before the first load.
    pub generation: u64,
    /// Key of the most recently issued fetch.
    pub key: Option<R::Key>,
    pub state: ResourceState<R::Output>,
    /// Results dropped because a newer key superseded them.
    pub stale_discarded: u64,
}

impl<R: RemoteResource> fmt::Debug for ResourceSnapshot<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceSnapshot")
            .field("generation", &self.generation)
            .field("key", &self.key)
            .field("state", &self.state)
            .field("stale_discarded", &self.stale_discarded)
            .finish()
    }
}

impl<R: RemoteResource> Clone for ResourceSnapshot<R> {
    fn clone(&self) -> Self {
        Self {
            generation: self.generation,
            key: self.key.clone(),
            state: self.state.clone(),
            stale_discarded: self.stale_discarded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_loading() {
        let state: ResourceState<u32> = ResourceState::default();
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.data().is_none());
        assert!(state.error_message().is_none());
        assert!(!state.is_settled());
    }

    #[test]
    fn data_and_message_only_in_their_phase() {
        let ready = ResourceState::Ready(vec![1, 2, 3]);
        assert_eq!(ready.phase(), Phase::Ready);
        assert_eq!(ready.data(), Some(&vec![1, 2, 3]));
        assert!(ready.error_message().is_none());

        let failed: ResourceState<Vec<u32>> =
            ResourceState::Error(FetchFailure::http("Something went wrong"));
        assert_eq!(failed.phase(), Phase::Error);
        assert!(failed.data().is_none());
        assert_eq!(failed.error_message(), Some("Something went wrong"));
        assert_eq!(failed.failure().map(|f| f.kind), Some(FailureKind::Http));
    }

    #[test]
    fn map_keeps_phase() {
        let ready = ResourceState::Ready(2).map(|n| n * 10);
        assert_eq!(ready, ResourceState::Ready(20));

        let failed: ResourceState<u32> = ResourceState::Error(FetchFailure::network("offline"));
        assert_eq!(failed.map(|n| n + 1).error_message(), Some("offline"));
    }
}
