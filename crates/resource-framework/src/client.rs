//! # Generic Client
//!
//! This module defines the generic client for communicating with a resource actor.

use crate::entity::RemoteResource;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::state::{ResourceSnapshot, ResourceState};
use tokio::sync::{mpsc, oneshot, watch};

/// ## ResourceClient
///
/// The `ResourceClient<R>` is the handle a view holds on a mounted resource. Requests go
/// to the actor over a Tokio mpsc channel and answers come back on oneshot channels; the
/// current [`ResourceState`] is mirrored through a watch channel so it can be read
/// without awaiting.
///
/// * **Cloneable** – holds only a sender and a watch receiver, so cloning is inexpensive.
/// * **Never blocks a render** – [`ResourceClient::state`] is synchronous.
/// * **Generic** – works with any resource that implements `RemoteResource`.
pub struct ResourceClient<R: RemoteResource> {
    sender: mpsc::Sender<ResourceRequest<R>>,
    state: watch::Receiver<ResourceState<R::Output>>,
}

impl<R: RemoteResource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<R: RemoteResource> ResourceClient<R> {
    pub fn new(
        sender: mpsc::Sender<ResourceRequest<R>>,
        state: watch::Receiver<ResourceState<R::Output>>,
    ) -> Self {
        Self { sender, state }
    }

    /// (Re)initialises the resource for `key` and returns the generation of the fetch.
    ///
    /// When this returns, the published state is already `Loading` for the new key.
    pub async fn load(&self, key: R::Key) -> Result<u64, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Load { key, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<ResourceSnapshot<R>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn unmount(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Unmount { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The latest published state.
    pub fn state(&self) -> ResourceState<R::Output> {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<R::Output>> {
        self.state.clone()
    }

    /// Waits until the current fetch resolved and returns the resulting state.
    pub async fn settled(&self) -> Result<ResourceState<R::Output>, FrameworkError> {
        let mut state = self.subscribe();
        let settled = state
            .wait_for(|s| s.is_settled())
            .await
            .map_err(|_| FrameworkError::ActorClosed)?
            .clone();
        Ok(settled)
    }
}
