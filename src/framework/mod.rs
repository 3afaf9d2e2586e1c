//! Generic actor framework for session state.
//!
//! This module provides the building blocks for actors that exclusively own one
//! piece of state and mutate it through typed actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that actor-owned state types implement
//! - [`ResourceActor`] - Generic actor that owns the state and runs the message loop
//! - [`ResourceClient`] - Cloneable handle that sends requests and subscribes to changes
//! - [`FrameworkError`] - Channel transport errors

pub mod core;

// Re-export core types for convenience
pub use core::*;
