use crate::model::OrderConfirmation;

/// Where a checkout attempt stands.
///
/// `Idle → Submitting → {Confirmed | Idle}`. A failed attempt goes straight back to
/// `Idle`; there is no retrying phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    /// An order request is in flight.
    Submitting,
    /// The order service accepted the order. Held until dismissed.
    Confirmed(OrderConfirmation),
}

impl CheckoutPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, CheckoutPhase::Submitting)
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        match self {
            CheckoutPhase::Confirmed(confirmation) => Some(confirmation),
            _ => None,
        }
    }
}
