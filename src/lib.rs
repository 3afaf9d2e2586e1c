//! # Storefront Cart
//!
//! > **The cart and checkout core of a storefront client.**
//!
//! A shopper's session holds one cart. Every UI surface (product listing, cart
//! page, cart panel) mutates that cart through a shared client, and checkout turns
//! it into an order on a remote order service.
//!
//! ## 🏗️ Design
//!
//! ### One owner per piece of state
//! The cart and the checkout phase are each owned by an actor running in its own
//! Tokio task. Actors process messages sequentially, so there are no locks, and
//! every mutation is published on a `watch` channel so all surfaces see it
//! immediately.
//!
//! ### Cart rules live in the state type
//! [`CartState`](model::CartState) implements merge-on-add by sku, index-based
//! removal, and quantity updates that ignore non-positive values. Totals are
//! recomputed on every read.
//!
//! ### Checkout is all-or-nothing for the cart
//! [`CheckoutClient::checkout`](clients::CheckoutClient::checkout) submits the
//! order once. The cart is cleared only after the order service accepts the order;
//! any failure leaves it untouched and yields a single "order failed" error. A
//! second checkout while one is in flight is refused.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and
//! [`ResourceClient`](framework::ResourceClient).
//!
//! ### 2. The State ([`model`], [`cart_actor`], [`checkout_actor`])
//! Cart entries, the cart, the checkout phase, and the actions on them.
//!
//! ### 3. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient) and [`CheckoutClient`](clients::CheckoutClient).
//!
//! ### 4. The Collaborators ([`services`])
//! HTTP access to the product catalog and the order service.
//!
//! ### 5. The Wiring ([`lifecycle`], [`config`])
//! [`StorefrontSession`](lifecycle::StorefrontSession) starts and stops everything.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! PRODUCT_API_URL=http://localhost:3001 ORDER_API_URL=http://localhost:3002 RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod checkout_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod services;
