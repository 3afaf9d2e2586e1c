//! Cart-specific state logic: the session's single authoritative cart.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::CartState;

/// Creates a new Cart actor, starting from an empty cart, and its client.
pub fn new() -> (ResourceActor<CartState>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(32, CartState::new());
    let client = CartClient::new(generic_client);

    (actor, client)
}
