//! Minimal SKU projection.
//!
//! A SKU is the parent of a `sku` order line item.

use std::collections::HashMap;

use serde::Deserialize;

use super::currency::Currency;
use super::expandable::Object;
use super::id::{ProductId, SkuId};

/// Stock-keeping unit: a specific purchasable variant of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sku {
    pub id: SkuId,
    #[serde(default)]
    pub active: bool,
    /// Variant attributes, e.g. `{"size": "M", "color": "blue"}`.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub currency: Currency,
    /// Unit price in minor currency units.
    #[serde(default)]
    pub price: i64,
    /// Parent product; the API never expands it inside an order item.
    #[serde(default)]
    pub product: Option<ProductId>,
    #[serde(default)]
    pub inventory: Option<SkuInventory>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub metadata: HashMap<String, String>,
}

/// Inventory tracking for a SKU.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkuInventory {
    /// `finite`, `bucket`, or `infinite`.
    #[serde(rename = "type")]
    pub inventory_type: String,
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Bucket value (`in_stock`, `limited`, `out_of_stock`) for bucket inventory.
    #[serde(default)]
    pub value: Option<String>,
}

impl Object for Sku {
    type Id = SkuId;

    fn id(&self) -> &SkuId {
        &self.id
    }
}
