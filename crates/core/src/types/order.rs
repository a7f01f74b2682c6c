//! Order domain types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::charge::Charge;
use super::currency::Currency;
use super::customer::Customer;
use super::expandable::{Expandable, Object};
use super::id::{ApplicationId, OrderId, OrderReturnId, RefundId, ShippingMethodId};
use super::list::List;
use super::order_item::OrderItem;

// =============================================================================
// Order Status Types
// =============================================================================

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order created, not yet paid.
    Created,
    /// Payment captured.
    Paid,
    /// Order canceled before fulfillment.
    Canceled,
    /// Order shipped or otherwise fulfilled.
    Fulfilled,
    /// All items returned.
    Returned,
}

impl OrderStatus {
    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Paid => "paid",
            Self::Canceled => "canceled",
            Self::Fulfilled => "fulfilled",
            Self::Returned => "returned",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "paid" => Ok(Self::Paid),
            "canceled" => Ok(Self::Canceled),
            "fulfilled" => Ok(Self::Fulfilled),
            "returned" => Ok(Self::Returned),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Timestamps (epoch seconds) at which the order entered each status.
///
/// A status that has not been reached is `0`; the API sends `null` for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StatusTransitions {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub canceled: i64,
    /// Wire name is `fulfiled`.
    #[serde(
        default,
        rename = "fulfiled",
        deserialize_with = "crate::de::null_as_default"
    )]
    pub fulfilled: i64,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub paid: i64,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub returned: i64,
}

impl StatusTransitions {
    /// Raw timestamp for a status; `0` if not reached or not tracked.
    #[must_use]
    pub const fn timestamp(&self, status: OrderStatus) -> i64 {
        match status {
            OrderStatus::Created => 0,
            OrderStatus::Paid => self.paid,
            OrderStatus::Canceled => self.canceled,
            OrderStatus::Fulfilled => self.fulfilled,
            OrderStatus::Returned => self.returned,
        }
    }

    /// When the order entered `status`, if it has.
    #[must_use]
    pub fn entered_at(&self, status: OrderStatus) -> Option<DateTime<Utc>> {
        match self.timestamp(status) {
            0 => None,
            secs => DateTime::from_timestamp(secs, 0),
        }
    }
}

// =============================================================================
// Shipping Types
// =============================================================================

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

/// Shipping details on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Shipping {
    pub address: Option<Address>,
    pub carrier: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tracking_number: Option<String>,
}

/// Discriminant of a [`DeliveryEstimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryEstimateType {
    Exact,
    Range,
}

/// Estimated delivery for a shipping method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeliveryEstimate {
    /// Delivery on a single date (`YYYY-MM-DD`).
    Exact { date: String },
    /// Delivery between two dates, inclusive.
    Range { earliest: String, latest: String },
}

impl DeliveryEstimate {
    #[must_use]
    pub const fn estimate_type(&self) -> DeliveryEstimateType {
        match self {
            Self::Exact { .. } => DeliveryEstimateType::Exact,
            Self::Range { .. } => DeliveryEstimateType::Range,
        }
    }
}

/// A shipping option offered for an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShippingMethod {
    pub id: ShippingMethodId,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub delivery_estimate: Option<DeliveryEstimate>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub description: String,
}

// =============================================================================
// Order
// =============================================================================

/// A purchase of one or more SKUs, with optional shipping, discounts and tax.
///
/// An order embedded in another resource usually arrives as a bare ID string.
/// Decoding such a payload yields an `Order` with only [`Order::id`] set and
/// every other field at its default value.
///
/// # Decoding
///
/// Decode through the `Deserialize` trait (`serde_json::from_str`,
/// `<Order as Deserialize>::deserialize`), which accepts both shapes.
///
/// `remote = "Self"` also generates an inherent `Order::deserialize` that
/// accepts only the full-object shape. Path syntax resolves to that inherent
/// function, so `Order::deserialize(d)` rejects a bare ID.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Order {
    pub id: OrderId,
    /// Total in minor currency units, including shipping, discounts and tax.
    #[serde(default)]
    pub amount: i64,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub amount_returned: i64,
    #[serde(default)]
    pub application: Option<ApplicationId>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub application_fee: i64,
    #[serde(default)]
    pub charge: Option<Expandable<Charge>>,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub livemode: bool,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub returns: Option<List<OrderReturn>>,
    #[serde(default)]
    pub selected_shipping_method: Option<ShippingMethodId>,
    #[serde(default)]
    pub shipping: Option<Shipping>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub shipping_methods: Vec<ShippingMethod>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub status_transitions: StatusTransitions,
    #[serde(default)]
    pub updated: i64,
}

impl Order {
    /// An order known only by its ID.
    #[must_use]
    pub fn unexpanded(id: OrderId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// The shipping method the customer picked, if any.
    #[must_use]
    pub fn selected_shipping(&self) -> Option<&ShippingMethod> {
        let selected = self.selected_shipping_method.as_ref()?;
        self.shipping_methods.iter().find(|m| &m.id == selected)
    }
}

impl Object for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn deserialize_object<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        Self: Deserialize<'de>,
    {
        // Inherent decoder generated by `remote = "Self"`.
        Self::deserialize(deserializer)
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Expandable::<Self>::deserialize(deserializer).map(Self::from)
    }
}

impl From<Expandable<Self>> for Order {
    fn from(reference: Expandable<Self>) -> Self {
        match reference {
            Expandable::Id(id) => Self::unexpanded(id),
            Expandable::Object(order) => *order,
        }
    }
}

// =============================================================================
// Order Returns
// =============================================================================

/// A return of some or all items of a paid order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderReturn {
    pub id: OrderReturnId,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub livemode: bool,
    #[serde(default)]
    pub order: Option<Expandable<Order>>,
    #[serde(default)]
    pub refund: Option<RefundId>,
}

impl Object for OrderReturn {
    type Id = OrderReturnId;

    fn id(&self) -> &OrderReturnId {
        &self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_bare_id_decodes_to_unexpanded_order() {
        let order: Order = serde_json::from_str("\"or_123\"").unwrap();
        assert_eq!(order, Order::unexpanded(OrderId::new("or_123")));
        assert_eq!(order.amount, 0);
        assert!(order.status.is_none());
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_full_object_decodes() {
        let order: Order = serde_json::from_value(json!({
            "id": "or_123",
            "object": "order",
            "amount": 1500,
            "amount_returned": null,
            "currency": "usd",
            "status": "paid",
            "charge": "ch_1",
            "customer": {"id": "cus_1", "email": "buyer@example.com"},
            "status_transitions": {"paid": 1_500_000_000, "canceled": null},
            "metadata": {"ref": "abc"}
        }))
        .unwrap();

        assert_eq!(order.id.as_str(), "or_123");
        assert_eq!(order.amount, 1500);
        assert_eq!(order.amount_returned, 0);
        assert_eq!(order.status, Some(OrderStatus::Paid));
        assert_eq!(order.charge.unwrap().id().as_str(), "ch_1");
        assert!(order.customer.unwrap().is_expanded());
        assert_eq!(order.status_transitions.paid, 1_500_000_000);
        assert_eq!(order.status_transitions.canceled, 0);
        assert_eq!(order.metadata.get("ref").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_trait_and_inherent_decoders() {
        let bare = json!("or_123");

        let order = <Order as Deserialize>::deserialize(&bare).unwrap();
        assert_eq!(order.id.as_str(), "or_123");

        // Inherent decoder from `remote = "Self"` only takes the object shape
        assert!(Order::deserialize(&bare).is_err());
        let order = Order::deserialize(&json!({"id": "or_123"})).unwrap();
        assert_eq!(order.id.as_str(), "or_123");
    }

    #[test]
    fn test_neither_shape_is_an_error() {
        assert!(serde_json::from_str::<Order>("42").is_err());
        assert!(serde_json::from_str::<Order>("true").is_err());
        assert!(serde_json::from_str::<Order>(r#"{"amount": 5}"#).is_err());
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let result = serde_json::from_value::<Order>(json!({"id": "or_1", "status": "lost"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_transition_entered_at() {
        let transitions = StatusTransitions {
            paid: 1_700_000_000,
            ..StatusTransitions::default()
        };
        assert!(transitions.entered_at(OrderStatus::Paid).is_some());
        assert!(transitions.entered_at(OrderStatus::Fulfilled).is_none());
        assert!(transitions.entered_at(OrderStatus::Created).is_none());
    }

    #[test]
    fn test_fulfilled_uses_wire_spelling() {
        let transitions: StatusTransitions =
            serde_json::from_value(json!({"fulfiled": 42, "fulfilled": 99})).unwrap();
        assert_eq!(transitions.fulfilled, 42);
    }

    #[test]
    fn test_delivery_estimate_variants() {
        let exact: DeliveryEstimate =
            serde_json::from_value(json!({"type": "exact", "date": "2024-05-01"})).unwrap();
        assert_eq!(exact.estimate_type(), DeliveryEstimateType::Exact);

        let range: DeliveryEstimate = serde_json::from_value(
            json!({"type": "range", "earliest": "2024-05-01", "latest": "2024-05-04"}),
        )
        .unwrap();
        assert_eq!(
            range,
            DeliveryEstimate::Range {
                earliest: "2024-05-01".to_string(),
                latest: "2024-05-04".to_string(),
            }
        );
    }

    #[test]
    fn test_selected_shipping() {
        let order: Order = serde_json::from_value(json!({
            "id": "or_1",
            "selected_shipping_method": "ship_fast",
            "shipping_methods": [
                {"id": "ship_free", "amount": 0, "currency": "usd", "description": "Free"},
                {"id": "ship_fast", "amount": 900, "currency": "usd", "description": "Express"}
            ]
        }))
        .unwrap();

        assert_eq!(order.selected_shipping().unwrap().amount, 900);
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("paid".parse::<OrderStatus>(), Ok(OrderStatus::Paid));
        assert!("unknown".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::Canceled.to_string(), "canceled");
    }
}
