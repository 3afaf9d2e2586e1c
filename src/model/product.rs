use crate::model::CartEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product record as returned by the catalog service.
///
/// Only `_id`, `name`, `sku` and `price` are guaranteed. Catalogs that also send
/// an image or description have them carried through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// The "Add to Cart" candidate for this product: one unit.
    pub fn to_cart_entry(&self) -> CartEntry {
        CartEntry {
            id: self.id.clone(),
            name: self.name.clone(),
            sku: self.sku.clone(),
            unit_price: self.price,
            quantity: 1,
            image_ref: self.image_url.clone(),
        }
    }
}
