//! Cart entries and the ordered cart state.
//!
//! [`CartState`] is the value owned by the cart actor. Its mutation methods encode the
//! storefront's cart rules; the actor only sequences calls to them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item in the cart, keyed by `sku`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub image_ref: Option<String>,
}

impl CartEntry {
    /// Creates a new cart entry without an image.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier of the product
    /// * `name` - Display name
    /// * `sku` - Stock keeping unit, the merge key
    /// * `unit_price` - Price of a single unit
    /// * `quantity` - Number of units
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sku: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            unit_price,
            quantity,
            image_ref: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// `unit_price × quantity`, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// The ordered sequence of entries in a session's cart.
///
/// Invariants:
/// - at most one entry per distinct `sku`;
/// - every entry has `quantity >= 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CartEntry> {
        self.entries.get(index)
    }

    /// Merge-on-add by `sku`.
    ///
    /// An existing entry keeps its position and fields and gains the candidate's
    /// quantity. A new `sku` is appended. A zero-quantity candidate is ignored.
    /// Returns whether the cart changed.
    pub fn add_item(&mut self, candidate: CartEntry) -> bool {
        if candidate.quantity == 0 {
            return false;
        }
        match self.entries.iter_mut().find(|e| e.sku == candidate.sku) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(candidate.quantity);
            }
            None => self.entries.push(candidate),
        }
        true
    }

    /// Removes the entry at `index`. An out-of-range index is ignored.
    pub fn remove_item(&mut self, index: usize) -> Option<CartEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Sets the quantity of the entry at `index`.
    ///
    /// Non-positive quantities and out-of-range indices are ignored; removal is a
    /// separate operation. Returns whether the cart changed.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> bool {
        let Some(quantity) = u32::try_from(quantity).ok().filter(|q| *q > 0) else {
            return false;
        };
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Moves the quantity at `index` by `delta`, never going below 1.
    pub fn step_quantity(&mut self, index: usize, delta: i64) -> bool {
        let Some(current) = self.entries.get(index).map(|e| i64::from(e.quantity)) else {
            return false;
        };
        self.update_quantity(index, current.saturating_add(delta).max(1))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Σ quantity, recomputed on every call.
    pub fn total_item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Σ unit_price × quantity, recomputed on every call.
    ///
    /// Prices come from the catalog unchecked, so the sum saturates instead of
    /// overflowing.
    pub fn total_price(&self) -> Decimal {
        self.entries
            .iter()
            .map(CartEntry::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Renders a price the way the storefront shows it: `$` and two decimals.
pub fn display_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
