//! Parameters for the order endpoints.

use serde::Serialize;

use super::source::{SourceError, SourceParams};
use super::{ListParams, Params, RangeQuery, RequestParams};
use crate::types::{
    CouponId, Currency, CustomerId, OrderId, OrderItemType, OrderStatus, ShippingMethodId,
};

// =============================================================================
// Item Parameters
// =============================================================================

/// An order item on create, or an item being returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderItemParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ID of the SKU, coupon or shipping method the item refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<OrderItemType>,
}

impl OrderItemParams {
    /// A SKU line with a quantity.
    #[must_use]
    pub fn sku(parent: impl Into<String>, quantity: i64) -> Self {
        Self {
            parent: Some(parent.into()),
            quantity: Some(quantity),
            item_type: Some(OrderItemType::Sku),
            ..Self::default()
        }
    }
}

// =============================================================================
// Create
// =============================================================================

/// Address for shipping on order creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Shipping details on order creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShippingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Parameters for creating an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<CouponId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItemParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingParams>,
}

// =============================================================================
// Update
// =============================================================================

/// Shipping details on order update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderUpdateShippingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// Parameters for updating an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderUpdateParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<CouponId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_shipping_method: Option<ShippingMethodId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<OrderUpdateShippingParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

// =============================================================================
// Pay / Return
// =============================================================================

/// Parameters for paying an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderPayParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceParams>,
}

impl OrderPayParams {
    /// Set the payment source after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unusable; the previous source is kept.
    pub fn set_source(&mut self, source: SourceParams) -> Result<(), SourceError> {
        source.validate()?;
        self.source = Some(source);
        Ok(())
    }
}

/// Parameters for returning items of an order.
///
/// With no items, the whole order is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderReturnParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItemParams>,
}

// =============================================================================
// List
// =============================================================================

/// Parameters for listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderListParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

macro_rules! impl_request_params {
    ($($name:ident),+ $(,)?) => {
        $(
            impl RequestParams for $name {
                fn params(&self) -> &Params {
                    &self.params
                }
            }
        )+
    };
}

impl_request_params!(
    OrderParams,
    OrderUpdateParams,
    OrderPayParams,
    OrderReturnParams,
    OrderListParams,
);
