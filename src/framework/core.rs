//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the session actors.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that every actor-owned state must implement.
//! - [`ResourceActor`]: The generic actor that owns one state value.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Transport errors (e.g., ActorClosed, ActorDropped).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Actions)
// =============================================================================

/// Trait that any actor-owned state must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// A session has exactly one cart and exactly one checkout phase. Instead of a keyed
/// store, each actor owns a *single* value of `Self` and mutates it through
/// [`ActorEntity::Action`] messages. Reads return a clone, so consumers never hold a
/// reference into actor state.
///
/// Actions are infallible at this layer: an action that does not apply (a stale
/// index, a rejected transition) reports that through its `ActionResult`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Enum representing state-specific operations (e.g., `AddItem`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Apply an action to the owned state.
    fn handle_action(&mut self, action: Self::Action) -> Self::ActionResult;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Get**: Retrieval. Returns a clone of the current state.
/// - **Action**: Mutation. Executes an [`ActorEntity::Action`] against the state.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one state value.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the
/// receiver end of the channel, and processes messages *sequentially* in its
/// own task. No `Mutex` or `RwLock` guards the state: exclusive ownership within
/// the task is the synchronization.
///
/// After every action the new state is published on a `watch` channel before the
/// reply is sent, so by the time a caller's `await` resolves every subscriber can
/// already see the mutation.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    state: T,
    publisher: watch::Sender<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `initial` - The state the actor starts with.
    pub fn new(buffer_size: usize, initial: T) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = ResourceClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "CartState" instead of "storefront_cart::model::cart::CartState")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { respond_to } => {
                    debug!(entity_type, "Get");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self.state.handle_action(action);
                    self.publisher.send_replace(self.state.clone());
                    debug!(entity_type, ?result, "Action ok");
                    let _ = respond_to.send(Ok(result));
                }
            }
        }

        info!(entity_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender and a watch receiver, so cloning is inexpensive. Every clone
/// talks to the same actor: this is how one authoritative state is shared by all
/// consumers of a session.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    watcher: watch::Receiver<T>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>, watcher: watch::Receiver<T>) -> Self {
        Self { sender, watcher }
    }

    pub async fn get(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// A receiver that observes every state published by the actor.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.watcher.clone()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
