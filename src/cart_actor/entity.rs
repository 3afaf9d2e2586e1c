//! ActorEntity trait implementation for the cart.
//!
//! This module contains the [`ActorEntity`] implementation that lets
//! [`CartState`] be owned by the generic [`crate::framework::ResourceActor`].

use super::actions::{CartAction, CartActionResult};
use crate::framework::ActorEntity;
use crate::model::CartState;
use tracing::debug;

impl ActorEntity for CartState {
    type Action = CartAction;
    type ActionResult = CartActionResult;

    /// Applies a cart mutation and returns the resulting cart.
    ///
    /// Ignored mutations (stale index, non-positive quantity) are logged at debug
    /// level and reported with `applied == false`.
    fn handle_action(&mut self, action: CartAction) -> CartActionResult {
        let applied = match action {
            CartAction::AddItem(candidate) => self.add_item(candidate),
            CartAction::RemoveItem(index) => self.remove_item(index).is_some(),
            CartAction::UpdateQuantity { index, quantity } => {
                debug!(index, quantity, "Updating quantity");
                self.update_quantity(index, quantity)
            }
            CartAction::StepQuantity { index, delta } => self.step_quantity(index, delta),
            CartAction::Clear => {
                self.clear();
                true
            }
        };
        if !applied {
            debug!(size = self.len(), "Cart mutation ignored");
        }
        CartActionResult {
            applied,
            state: self.clone(),
        }
    }
}
