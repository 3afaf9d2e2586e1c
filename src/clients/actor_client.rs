use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for state-specific clients to inherit the standard read operations.
///
/// This trait reduces boilerplate by providing default implementations of
/// `snapshot` and `subscribe` on top of the wrapped [`ResourceClient`].
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The state-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The current state, by value.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }

    /// Observe every state the actor publishes.
    fn subscribe(&self) -> watch::Receiver<T> {
        self.inner().subscribe()
    }
}
