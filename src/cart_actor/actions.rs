//! Mutations accepted by the Cart actor.
//!
//! These are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`CartState`](crate::model::CartState). None of them fail: invalid arguments
//! leave the cart as it was.

use crate::model::{CartEntry, CartState};

/// Operations on the cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge-on-add by sku, or append.
    AddItem(CartEntry),
    /// Delete the entry at the given position.
    RemoveItem(usize),
    /// Replace the quantity at `index`; non-positive values are ignored.
    UpdateQuantity { index: usize, quantity: i64 },
    /// Move the quantity at `index` by `delta`, flooring at 1.
    StepQuantity { index: usize, delta: i64 },
    /// Reset to empty after a confirmed order.
    Clear,
}

/// Outcome of a [`CartAction`].
#[derive(Debug, Clone)]
pub struct CartActionResult {
    /// Whether the cart changed.
    pub applied: bool,
    /// The cart after the action.
    pub state: CartState,
}
