//! Wire types exchanged with the order service.
//!
//! Quantities travel as strings in both directions. Prices are never sent; the
//! order service prices the order itself.

use crate::model::{CartEntry, CartState};
use serde::{Deserialize, Serialize};

/// One line of an order as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub sku: String,
    pub quantity: String,
}

impl From<&CartEntry> for OrderLine {
    fn from(entry: &CartEntry) -> Self {
        Self {
            name: entry.name.clone(),
            sku: entry.sku.clone(),
            quantity: entry.quantity.to_string(),
        }
    }
}

/// Body of `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
}

impl From<&CartState> for OrderRequest {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart.entries().iter().map(OrderLine::from).collect(),
        }
    }
}

/// The accepted order as reported by the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub timestamp: String,
    pub status: String,
    pub items: Vec<OrderLine>,
}

impl OrderConfirmation {
    /// Status with its first letter upper-cased, e.g. `pending` -> `Pending`.
    pub fn display_status(&self) -> String {
        let mut chars = self.status.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Success body of `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub message: String,
    pub order: OrderConfirmation,
}
