//! # Resource Actor
//!
//! This module defines the `ResourceActor`, the "server" half of a mounted resource.
//! It owns the [`ResourceState`] of exactly one instance and applies every transition
//! sequentially, so requests and fetch results for one instance are never interleaved.

use crate::client::ResourceClient;
use crate::entity::RemoteResource;
use crate::error::FrameworkError;
use crate::message::{Completion, ResourceRequest};
use crate::state::{ResourceSnapshot, ResourceState};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The generic actor that drives one resource instance through its lifecycle.
///
/// # Concurrency Model
/// The actor reads from two channels: client requests and completions sent back by the
/// fetch tasks it spawned. Both are drained by a single loop, so the state needs no lock
/// and transitions are applied in the order the actor sees them.
///
/// # Stale-Response Guard
/// Every `Load` bumps `generation` and tags the spawned fetch with it. A completion whose
/// generation is no longer current is counted and dropped; nothing is ever aborted. Once
/// the actor stops, completions have no receiver and are dropped by the fetch task.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass the dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop, then `client.load(key)`.
///
/// [`ResourceActor::mount`] does all three.
pub struct ResourceActor<R: RemoteResource> {
    receiver: mpsc::Receiver<ResourceRequest<R>>,
    completions: mpsc::UnboundedReceiver<Completion<R>>,
    completion_sender: mpsc::UnboundedSender<Completion<R>>,
    publisher: watch::Sender<ResourceState<R::Output>>,
    key: Option<R::Key>,
    generation: u64,
    stale_discarded: u64,
}

impl<R: RemoteResource> ResourceActor<R> {
    /// Creates a new `ResourceActor` in the `Loading` phase and its `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. If it is full, client calls
    /// wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let (publisher, state) = watch::channel(ResourceState::Loading);
        let actor = Self {
            receiver,
            completions,
            completion_sender,
            publisher,
            key: None,
            generation: 0,
            stale_discarded: 0,
        };
        let client = ResourceClient::new(sender, state);
        (actor, client)
    }

    /// Creates the actor, spawns it with `context`, and issues the first load for `key`.
    pub async fn mount(
        buffer_size: usize,
        context: R::Context,
        key: R::Key,
    ) -> Result<MountedResource<R>, FrameworkError> {
        let (actor, client) = Self::new(buffer_size);
        let handle = tokio::spawn(actor.run(context));
        client.load(key).await?;
        Ok(MountedResource { client, handle })
    }

    /// Runs the actor's event loop until it is unmounted or every client is dropped.
    ///
    /// The `context` is shared with every fetch task the actor spawns.
    pub async fn run(mut self, context: R::Context) {
        let resource = resource_name::<R>();
        let context = Arc::new(context);
        info!(resource, "Resource mounted");

        loop {
            tokio::select! {
                biased;
                Some(completion) = self.completions.recv() => {
                    self.apply(resource, completion);
                }
                request = self.receiver.recv() => match request {
                    Some(ResourceRequest::Load { key, respond_to }) => {
                        let generation = self.load(resource, key, &context);
                        let _ = respond_to.send(Ok(generation));
                    }
                    Some(ResourceRequest::Snapshot { respond_to }) => {
                        let _ = respond_to.send(Ok(self.snapshot()));
                    }
                    Some(ResourceRequest::Unmount { respond_to }) => {
                        debug!(resource, "Unmount requested");
                        let _ = respond_to.send(Ok(()));
                        break;
                    }
                    None => break,
                }
            }
        }

        info!(
            resource,
            generation = self.generation,
            stale_discarded = self.stale_discarded,
            "Resource unmounted"
        );
    }

    fn load(&mut self, resource: &'static str, key: R::Key, context: &Arc<R::Context>) -> u64 {
        if self.key.as_ref() == Some(&key) {
            debug!(resource, ?key, generation = self.generation, "Key unchanged");
            return self.generation;
        }

        self.generation += 1;
        let generation = self.generation;
        self.key = Some(key.clone());
        self.publisher.send_replace(ResourceState::Loading);
        info!(resource, ?key, generation, "Fetch issued");

        let context = Arc::clone(context);
        let completions = self.completion_sender.clone();
        tokio::spawn(async move {
            let result = R::fetch(&key, &context).await;
            if completions.send(Completion { generation, result }).is_err() {
                debug!(resource, generation, "Result arrived after unmount, dropped");
            }
        });

        generation
    }

    fn apply(&mut self, resource: &'static str, completion: Completion<R>) {
        let Completion { generation, result } = completion;
        if generation != self.generation {
            self.stale_discarded += 1;
            debug!(
                resource,
                generation,
                current = self.generation,
                "Stale response discarded"
            );
            return;
        }

        let state = match result {
            Ok(data) => {
                info!(resource, generation, "Ready");
                ResourceState::Ready(data)
            }
            Err(e) => {
                let failure = R::describe_failure(&e);
                warn!(resource, generation, kind = ?failure.kind, error = %e, "Fetch failed");
                ResourceState::Error(failure)
            }
        };
        self.publisher.send_replace(state);
    }

    fn snapshot(&self) -> ResourceSnapshot<R> {
        ResourceSnapshot {
            generation: self.generation,
            key: self.key.clone(),
            state: self.publisher.borrow().clone(),
            stale_discarded: self.stale_discarded,
        }
    }
}

/// A resource actor running in its own task, together with a client for it.
pub struct MountedResource<R: RemoteResource> {
    client: ResourceClient<R>,
    handle: JoinHandle<()>,
}

impl<R: RemoteResource> MountedResource<R> {
    pub fn client(&self) -> &ResourceClient<R> {
        &self.client
    }

    /// Stops the actor and waits for its task to finish.
    pub async fn unmount(self) -> Result<(), FrameworkError> {
        // An actor that already stopped has nothing left to unmount.
        let _ = self.client.unmount().await;
        drop(self.client);
        self.handle.await.map_err(|_| FrameworkError::ActorDropped)
    }
}

// Extract just the type name (e.g., "ProductDetail" instead of "storefront::product_detail::ProductDetail")
fn resource_name<R>() -> &'static str {
    std::any::type_name::<R>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
