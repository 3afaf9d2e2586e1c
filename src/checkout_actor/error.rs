//! Error types for checkout.

use crate::cart_actor::CartError;
use thiserror::Error;

/// Errors returned by [`CheckoutClient::checkout`](crate::clients::CheckoutClient::checkout).
///
/// Every order-service failure (rejected, unreachable, unreadable reply) is
/// reported as [`CheckoutError::OrderFailed`]; the cause is only logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Another checkout of this session is still waiting for the order service.
    #[error("A checkout is already in progress")]
    AlreadyInProgress,

    /// The order could not be placed. The cart is unchanged.
    #[error("Failed to place order")]
    OrderFailed,

    /// The cart actor could not be reached.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CheckoutError {
    fn from(msg: String) -> Self {
        CheckoutError::ActorCommunicationError(msg)
    }
}
