//! Order line items and their parent references.
//!
//! The shape of an item's `parent` field depends on the item's `type`:
//!
//! | `type`     | `parent`                                    |
//! |------------|---------------------------------------------|
//! | `coupon`   | coupon ID string                            |
//! | `shipping` | shipping method ID string                   |
//! | `sku`      | SKU ID string, or the SKU object if expanded |
//! | `discount` | not a reference                             |
//! | `tax`      | not a reference                             |
//!
//! Items are decoded in one pass with `parent` held as an untyped value, then
//! the parent alone is decoded against the shape its type implies. A parent
//! that does not match is dropped rather than failing the whole item.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::currency::Currency;
use super::expandable::Expandable;
use super::id::{CouponId, ShippingMethodId};
use super::sku::Sku;

/// Kind of order line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderItemType {
    Sku,
    Discount,
    Shipping,
    Tax,
    Coupon,
}

impl OrderItemType {
    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sku => "sku",
            Self::Discount => "discount",
            Self::Shipping => "shipping",
            Self::Tax => "tax",
            Self::Coupon => "coupon",
        }
    }
}

impl std::fmt::Display for OrderItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of resource an item's parent points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderItemParentType {
    Coupon,
    Shipping,
    Sku,
}

/// The resource an order item was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderItemParent {
    Coupon(CouponId),
    Shipping(ShippingMethodId),
    Sku(Expandable<Sku>),
}

impl OrderItemParent {
    /// Decode a raw `parent` value against the shape implied by `item_type`.
    ///
    /// Returns `Ok(None)` for item types that have no parent reference.
    fn decode(
        item_type: OrderItemType,
        raw: serde_json::Value,
    ) -> Result<Option<Self>, serde_json::Error> {
        let parent = match item_type {
            OrderItemType::Coupon => Self::Coupon(CouponId::deserialize(raw)?),
            OrderItemType::Shipping => Self::Shipping(ShippingMethodId::deserialize(raw)?),
            OrderItemType::Sku => Self::Sku(Expandable::<Sku>::deserialize(raw)?),
            OrderItemType::Discount | OrderItemType::Tax => return Ok(None),
        };
        Ok(Some(parent))
    }

    /// ID of the parent resource. For an expanded SKU this is the SKU's own ID.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Coupon(id) => id.as_str(),
            Self::Shipping(id) => id.as_str(),
            Self::Sku(sku) => sku.id().as_str(),
        }
    }

    #[must_use]
    pub const fn parent_type(&self) -> OrderItemParentType {
        match self {
            Self::Coupon(_) => OrderItemParentType::Coupon,
            Self::Shipping(_) => OrderItemParentType::Shipping,
            Self::Sku(_) => OrderItemParentType::Sku,
        }
    }

    /// The expanded SKU, when the parent is a SKU that arrived expanded.
    #[must_use]
    pub fn sku(&self) -> Option<&Sku> {
        match self {
            Self::Sku(sku) => sku.as_object(),
            Self::Coupon(_) | Self::Shipping(_) => None,
        }
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "OrderItemWire")]
pub struct OrderItem {
    /// Line total in minor currency units.
    pub amount: i64,
    pub currency: Currency,
    pub description: String,
    /// Set only when the wire `parent` matched the shape `item_type` implies.
    pub parent: Option<OrderItemParent>,
    /// Only meaningful for `sku` items.
    pub quantity: Option<i64>,
    pub item_type: OrderItemType,
}

impl OrderItem {
    /// Shorthand for the parent's ID.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_ref().map(OrderItemParent::id)
    }
}

/// Wire shape of an order item with `parent` left undecoded.
#[derive(Deserialize)]
struct OrderItemWire {
    #[serde(default)]
    amount: i64,
    #[serde(default)]
    currency: Currency,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    description: String,
    #[serde(default)]
    parent: serde_json::Value,
    #[serde(default)]
    quantity: Option<i64>,
    /// Required; every item the API returns carries one.
    #[serde(rename = "type")]
    item_type: OrderItemType,
}

impl From<OrderItemWire> for OrderItem {
    fn from(wire: OrderItemWire) -> Self {
        let OrderItemWire {
            amount,
            currency,
            description,
            parent,
            quantity,
            item_type,
        } = wire;

        let parent = OrderItemParent::decode(item_type, parent).unwrap_or_else(|error| {
            debug!(%item_type, %error, "order item parent does not match item type");
            None
        });

        Self {
            amount,
            currency,
            description,
            parent,
            quantity,
            item_type,
        }
    }
}
