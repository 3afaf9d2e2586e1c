//! # Session Lifecycle
//!
//! This module manages the runtime lifecycle of a shopper's session: starting the
//! actors, wiring them together, and shutting them down.
//!
//! ## Wiring
//!
//! [`StorefrontSession`] creates exactly one cart actor and injects clones of its
//! client wherever the cart is needed. The listing page, the cart page, the cart
//! panel and checkout therefore all read and mutate the same cart:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new();
//! let (checkout_actor, checkout_inner) = checkout_actor::new();
//! let checkout_client = CheckoutClient::new(checkout_inner, cart_client.clone(), orders);
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for every actor task to finish
//!
//! Clones handed to UI code keep their actor alive until they are dropped too.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`](self::tracing) module.

pub mod storefront_session;
pub mod tracing;

pub use storefront_session::*;
pub use self::tracing::*;
