//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Cart mutations themselves never fail; the only failure is losing the actor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
