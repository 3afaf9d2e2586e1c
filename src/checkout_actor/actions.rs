use crate::model::OrderConfirmation;

/// Phase transitions of a checkout attempt.
#[derive(Debug, Clone)]
pub enum CheckoutAction {
    /// `Idle | Confirmed → Submitting`. Refused while already submitting.
    Begin,
    /// `Submitting → Confirmed`.
    Confirm(OrderConfirmation),
    /// `Submitting → Idle`.
    Fail,
    /// `Confirmed → Idle`, discarding the confirmation.
    Dismiss,
}
