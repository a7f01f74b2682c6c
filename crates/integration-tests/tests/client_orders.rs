//! Integration tests for the order client against a mock API server.
//!
//! Each test drives a realistic sequence of calls and checks both what the
//! client sent and how it decoded the replies.

#![allow(clippy::unwrap_used)]

use paydesk_client::{Client, ClientConfig, ClientError};
use paydesk_core::{
    OrderId, OrderItemParams, OrderListParams, OrderParams, OrderPayParams, OrderReturnParams,
    OrderStatus, Params, SourceParams,
};
use paydesk_integration_tests::{TEST_API_KEY, list_of, order_return, paid_order};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(SecretString::from(TEST_API_KEY))
        .unwrap()
        .with_api_base(&format!("{}/v1", server.uri()))
        .unwrap();
    (server, Client::new(&config).unwrap())
}

fn created_order() -> serde_json::Value {
    let mut order = paid_order();
    order["status"] = json!("created");
    order["charge"] = json!(null);
    order["status_transitions"]["paid"] = json!(null);
    order
}

// ============================================================================
// Order Lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_pay_and_return_order() {
    let (server, client) = setup().await;
    let order_id = "or_1Hh1YA2eZvKYlo2C";

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(body_string_contains("items%5B0%5D%5Bparent%5D=sku_tee_m"))
        .and(body_string_contains("items%5B0%5D%5Bquantity%5D=2"))
        .and(body_string_contains("email=jenny.rosen%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_order()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/orders/{order_id}/pay")))
        .and(body_string_contains("source=tok_visa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paid_order()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/orders/{order_id}/returns")))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_return(order_id)))
        .expect(1)
        .mount(&server)
        .await;

    let params = OrderParams {
        currency: Some("usd".into()),
        email: Some("jenny.rosen@example.com".to_string()),
        items: vec![OrderItemParams::sku("sku_tee_m", 2)],
        ..OrderParams::default()
    };
    let order = client.create_order(&params).await.unwrap();
    assert_eq!(order.status, Some(OrderStatus::Created));
    assert_eq!(order.status_transitions.paid, 0);
    assert!(order.charge.is_none());

    let mut pay = OrderPayParams::default();
    pay.set_source(SourceParams::token("tok_visa")).unwrap();
    let order = client.pay_order(&order.id, &pay).await.unwrap();
    assert_eq!(order.status, Some(OrderStatus::Paid));
    assert_eq!(order.charge.unwrap().id().as_str(), "ch_1Hh1YB2eZvKYlo2C");

    let order_return = client
        .return_order(&order.id, &OrderReturnParams::default())
        .await
        .unwrap();
    assert_eq!(order_return.amount, 4000);
    assert_eq!(order_return.order.unwrap().id(), &order.id);
}

#[tokio::test]
async fn test_paginate_orders() {
    let (server, client) = setup().await;

    let mut second = paid_order();
    second["id"] = json!("or_2");

    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .and(query_param("starting_after", "or_1Hh1YA2eZvKYlo2C"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_of("/v1/orders", vec![second], false)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_of("/v1/orders", vec![paid_order()], true)),
        )
        .mount(&server)
        .await;

    let mut params = OrderListParams::default();
    params.list.limit = Some(1);

    let mut seen = Vec::new();
    loop {
        let page = client.list_orders(&params).await.unwrap();
        seen.extend(page.data.iter().map(|order| order.id.clone()));
        match page.last_id() {
            Some(last) if page.has_more => {
                params.list.starting_after = Some(last.to_string());
            }
            _ => break,
        }
    }

    assert_eq!(
        seen,
        vec![OrderId::new("or_1Hh1YA2eZvKYlo2C"), OrderId::new("or_2")]
    );
}

#[tokio::test]
async fn test_get_order_expanding_item_parents() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/or_1Hh1YA2eZvKYlo2C"))
        .and(query_param("expand[0]", "customer"))
        .and(query_param("expand[1]", "items.parent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paid_order()))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = Params::default();
    params.add_expand("customer");
    params.add_expand("items.parent");

    let order = client
        .get_order(&OrderId::new("or_1Hh1YA2eZvKYlo2C"), &params)
        .await
        .unwrap();
    assert!(order.customer.unwrap().is_expanded());
    let sku = order.items.first().unwrap().parent.as_ref().unwrap().sku();
    assert_eq!(sku.map(|s| s.price), Some(2000));
}

// ============================================================================
// Retries and Errors
// ============================================================================

#[tokio::test]
async fn test_retry_reuses_idempotency_key() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders/or_1/pay"))
        .and(header("idempotency-key", "pay-or_1"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "2"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/orders/or_1/pay"))
        .and(header_exists("idempotency-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paid_order()))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = OrderPayParams::default();
    params.set_source(SourceParams::token("tok_visa")).unwrap();
    params.params.idempotency_key = Some("pay-or_1".to_string());

    let id = OrderId::new("or_1");
    let err = client.pay_order(&id, &params).await.unwrap_err();
    assert!(matches!(err, ClientError::RateLimited(2)));

    let order = client.pay_order(&id, &params).await.unwrap();
    assert_eq!(order.status, Some(OrderStatus::Paid));
}

#[tokio::test]
async fn test_invalid_request_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "code": "resource_missing",
                "message": "No such sku: 'sku_gone'",
                "param": "items[0][parent]"
            }
        })))
        .mount(&server)
        .await;

    let params = OrderParams {
        items: vec![OrderItemParams::sku("sku_gone", 1)],
        ..OrderParams::default()
    };
    let err = client.create_order(&params).await.unwrap_err();

    let ClientError::Api {
        status,
        error_type,
        message,
        param,
    } = err
    else {
        panic!("expected API error");
    };
    assert_eq!(status, 400);
    assert_eq!(error_type, "invalid_request_error");
    assert!(message.contains("sku_gone"));
    assert_eq!(param.as_deref(), Some("items[0][parent]"));
}

#[tokio::test]
async fn test_unparseable_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/or_1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client
        .get_order(&OrderId::new("or_1"), &Params::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Api { status: 502, ref error_type, ref message, .. }
            if error_type == "unknown" && message == "Bad Gateway"
    ));
}
