//! ActorEntity trait implementation for the checkout phase.

use super::actions::CheckoutAction;
use crate::framework::ActorEntity;
use crate::model::CheckoutPhase;
use tracing::warn;

impl ActorEntity for CheckoutPhase {
    type Action = CheckoutAction;
    /// Whether the transition was taken.
    type ActionResult = bool;

    fn handle_action(&mut self, action: CheckoutAction) -> bool {
        let next = match (&*self, action) {
            (CheckoutPhase::Submitting, CheckoutAction::Begin) => None,
            (_, CheckoutAction::Begin) => Some(CheckoutPhase::Submitting),
            (CheckoutPhase::Submitting, CheckoutAction::Confirm(confirmation)) => {
                Some(CheckoutPhase::Confirmed(confirmation))
            }
            (CheckoutPhase::Submitting, CheckoutAction::Fail) => Some(CheckoutPhase::Idle),
            (CheckoutPhase::Confirmed(_), CheckoutAction::Dismiss) => Some(CheckoutPhase::Idle),
            (phase, action) => {
                warn!(?phase, ?action, "Ignoring checkout transition");
                None
            }
        };
        match next {
            Some(phase) => {
                *self = phase;
                true
            }
            None => false,
        }
    }
}
