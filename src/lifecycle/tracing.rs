//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate for the whole session.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG` and default to `info`. The compact format hides
//! module paths (`with_target(false)`); actors identify themselves with an
//! `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run          # lifecycle, order placement, failures
//! RUST_LOG=debug cargo run         # every actor message, request payloads
//! RUST_LOG=storefront_cart::services=debug cargo run
//! ```
//!
//! ## Checkout Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="CartState"
//! INFO Actor started entity_type="CheckoutPhase"
//! INFO checkout: Placing order items=2
//! INFO checkout: Order placed order_id=ord-42 message=Order placed
//! ```
//!
//! **With `RUST_LOG=debug`** each cart action and the outgoing order body are logged:
//!
//! ```text
//! DEBUG add_item: Action entity_type="CartState" action=AddItem(CartEntry { .. })
//! DEBUG checkout:submit_order: Submitting order url=http://orders/order request=OrderRequest { .. }
//! ```
//!
//! A rejected order shows up at `warn` with the underlying cause:
//!
//! ```text
//! WARN checkout: Error placing order error=Order service rejected the order with status 500 Internal Server Error
//! ```
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
