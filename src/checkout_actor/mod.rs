//! Checkout phase tracking.
//!
//! The checkout actor owns the [`CheckoutPhase`] of the session. Because it handles
//! one message at a time, `Begin` doubles as the mutual-exclusion point for
//! checkout attempts.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::CheckoutPhase;

/// Creates a new Checkout actor in the `Idle` phase and its generic client.
///
/// The generic client is wrapped by [`CheckoutClient`](crate::clients::CheckoutClient)
/// together with the cart and order service it orchestrates.
pub fn new() -> (ResourceActor<CheckoutPhase>, ResourceClient<CheckoutPhase>) {
    ResourceActor::new(8, CheckoutPhase::Idle)
}
