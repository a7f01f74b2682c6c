//! Integration tests for Paydesk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paydesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_decoding` - Decoding realistic order payloads
//! - `client_orders` - Client calls against a mock API server
//!
//! The API is mocked with `wiremock`; no network access or keys are needed.

use serde_json::{Value, json};

/// Test API key accepted by client configuration.
pub const TEST_API_KEY: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";

/// A fully populated paid order with an expanded customer and SKU, a coupon,
/// shipping and tax lines, and one extra field the client does not model.
#[must_use]
pub fn paid_order() -> Value {
    json!({
        "id": "or_1Hh1YA2eZvKYlo2C",
        "object": "order",
        "amount": 4550,
        "amount_returned": 0,
        "application": null,
        "application_fee": null,
        "charge": "ch_1Hh1YB2eZvKYlo2C",
        "created": 1_603_900_000,
        "currency": "usd",
        "customer": {
            "id": "cus_IHi9",
            "object": "customer",
            "email": "jenny.rosen@example.com",
            "created": 1_600_000_000,
            "metadata": {"tier": "gold"}
        },
        "email": "jenny.rosen@example.com",
        "external_coupon_code": "SPRING",
        "items": [
            {
                "object": "order_item",
                "amount": 4000,
                "currency": "usd",
                "description": "Linen tee",
                "parent": {
                    "id": "sku_tee_m",
                    "object": "sku",
                    "active": true,
                    "attributes": {"size": "M"},
                    "currency": "usd",
                    "price": 2000,
                    "product": "prod_tee",
                    "inventory": {"type": "finite", "quantity": 40, "value": null},
                    "metadata": {}
                },
                "quantity": 2,
                "type": "sku"
            },
            {
                "object": "order_item",
                "amount": -500,
                "currency": "usd",
                "description": "SPRING",
                "parent": "SPRING",
                "quantity": null,
                "type": "coupon"
            },
            {
                "object": "order_item",
                "amount": 700,
                "currency": "usd",
                "description": "Express",
                "parent": "ship_express",
                "quantity": null,
                "type": "shipping"
            },
            {
                "object": "order_item",
                "amount": 350,
                "currency": "usd",
                "description": "Taxes (included)",
                "parent": null,
                "quantity": null,
                "type": "tax"
            }
        ],
        "livemode": false,
        "metadata": {"channel": "web"},
        "returns": {
            "object": "list",
            "data": [],
            "has_more": false,
            "total_count": 0,
            "url": "/v1/order_returns?order=or_1Hh1YA2eZvKYlo2C"
        },
        "selected_shipping_method": "ship_express",
        "shipping": {
            "address": {
                "city": "Honolulu",
                "country": "US",
                "line1": "1 Aloha Way",
                "line2": null,
                "postal_code": "96815",
                "state": "HI"
            },
            "carrier": null,
            "name": "Jenny Rosen",
            "phone": null,
            "tracking_number": null
        },
        "shipping_methods": [
            {
                "id": "ship_free",
                "amount": 0,
                "currency": "usd",
                "delivery_estimate": {"type": "range", "earliest": "2020-11-02", "latest": "2020-11-06"},
                "description": "Free shipping"
            },
            {
                "id": "ship_express",
                "amount": 700,
                "currency": "usd",
                "delivery_estimate": {"type": "exact", "date": "2020-10-30"},
                "description": "Express"
            }
        ],
        "status": "paid",
        "status_transitions": {
            "canceled": null,
            "fulfiled": null,
            "paid": 1_603_900_100,
            "returned": null
        },
        "updated": 1_603_900_100
    })
}

/// A bare order reference as it appears when not expanded.
#[must_use]
pub fn order_reference(id: &str) -> Value {
    Value::String(id.to_string())
}

/// An order return that points back at its order by ID.
#[must_use]
pub fn order_return(order_id: &str) -> Value {
    json!({
        "id": "orret_1Hh2",
        "object": "order_return",
        "amount": 4000,
        "created": 1_604_000_000,
        "currency": "usd",
        "items": [
            {"object": "order_item", "amount": 4000, "currency": "usd", "description": "Linen tee", "parent": "sku_tee_m", "quantity": 2, "type": "sku"}
        ],
        "livemode": false,
        "order": order_id,
        "refund": "re_1Hh2"
    })
}

/// Wrap values in a list envelope.
#[must_use]
pub fn list_of(url: &str, data: Vec<Value>, has_more: bool) -> Value {
    json!({
        "object": "list",
        "url": url,
        "has_more": has_more,
        "data": data
    })
}
