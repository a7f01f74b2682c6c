//! Order commands.
//!
//! # Environment Variables
//!
//! - `PAYDESK_API_KEY` - Secret API key
//! - `PAYDESK_API_BASE` - API base URL (optional)

use std::fmt::Write as _;

use paydesk_client::{Client, ClientError};
use paydesk_core::{
    Order, OrderId, OrderItem, OrderListParams, OrderPayParams, OrderReturn, OrderReturnParams,
    OrderStatus, Params, SourceError, SourceParams,
};
use thiserror::Error;

/// Errors that can occur while running an order command.
#[derive(Debug, Error)]
pub enum OrderCommandError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Invalid payment source: {0}")]
    Source(#[from] SourceError),

    /// Only paid or fulfilled orders can be returned.
    #[error("Order {id} cannot be returned while {status}")]
    NotReturnable { id: String, status: String },
}

/// Fetch and print one order.
pub async fn get(client: &Client, id: &str, expand: Vec<String>) -> Result<(), OrderCommandError> {
    let params = Params {
        expand,
        ..Params::default()
    };
    let order = client.get_order(&OrderId::new(id), &params).await?;
    emit(&render_order(&order));
    Ok(())
}

/// Print one page of orders.
pub async fn list(
    client: &Client,
    status: Option<OrderStatus>,
    customer: Option<String>,
    limit: u32,
) -> Result<(), OrderCommandError> {
    let mut params = OrderListParams {
        status,
        customer: customer.map(Into::into),
        ..OrderListParams::default()
    };
    params.list.limit = Some(limit);

    let page = client.list_orders(&params).await?;
    tracing::info!(count = page.data.len(), has_more = page.has_more, "Listed orders");

    for order in &page.data {
        emit(&render_order(order));
    }
    if page.has_more
        && let Some(last) = page.last_id()
    {
        emit(&format!("(more orders after {last})"));
    }
    Ok(())
}

/// Pay an order with a token or source ID.
pub async fn pay(
    client: &Client,
    id: &str,
    source: &str,
    email: Option<String>,
) -> Result<(), OrderCommandError> {
    let mut params = OrderPayParams {
        email,
        ..OrderPayParams::default()
    };
    params.set_source(SourceParams::token(source))?;

    let order = client.pay_order(&OrderId::new(id), &params).await?;
    tracing::info!(order_id = %order.id, "Order paid");
    emit(&render_order(&order));
    Ok(())
}

/// Return every item of a paid or fulfilled order.
pub async fn return_all(client: &Client, id: &str) -> Result<(), OrderCommandError> {
    let id = OrderId::new(id);
    let order = client.get_order(&id, &Params::default()).await?;

    if !matches!(
        order.status,
        Some(OrderStatus::Paid | OrderStatus::Fulfilled)
    ) {
        return Err(OrderCommandError::NotReturnable {
            id: id.into_inner(),
            status: order
                .status
                .map_or_else(|| "unknown".to_string(), |s| s.to_string()),
        });
    }

    // No items means the whole order
    let order_return = client
        .return_order(&id, &OrderReturnParams::default())
        .await?;
    tracing::info!(return_id = %order_return.id, "Order returned");
    emit(&render_return(&order_return));
    Ok(())
}

#[allow(clippy::print_stdout)]
fn emit(text: &str) {
    println!("{text}");
}

/// Human-readable summary of an order.
fn render_order(order: &Order) -> String {
    let mut out = String::new();
    let status = order.status.map_or("unknown", OrderStatus::as_str);
    let _ = write!(
        out,
        "{}  {}  {}",
        order.id,
        status,
        order.currency.format_amount(order.amount)
    );
    if let Some(at) = order
        .status
        .and_then(|s| order.status_transitions.entered_at(s))
    {
        let _ = write!(out, "  since {}", at.format("%Y-%m-%d %H:%M UTC"));
    }

    if let Some(customer) = &order.customer {
        let _ = write!(out, "\n  customer  {}", customer.id());
        if let Some(email) = customer.as_object().and_then(|c| c.email.as_deref()) {
            let _ = write!(out, " <{email}>");
        }
    }
    if let Some(email) = &order.email {
        let _ = write!(out, "\n  email     {email}");
    }
    if let Some(method) = order.selected_shipping() {
        let _ = write!(out, "\n  shipping  {} ({})", method.description, method.id);
    }
    if let Some(tracking) = order
        .shipping
        .as_ref()
        .and_then(|s| s.tracking_number.as_deref())
    {
        let _ = write!(out, "\n  tracking  {tracking}");
    }
    for item in &order.items {
        out.push_str("\n    ");
        render_item(&mut out, item);
    }
    out
}

fn render_item(out: &mut String, item: &OrderItem) {
    let _ = write!(
        out,
        "{:<9} {:>14}",
        item.item_type.as_str(),
        item.currency.format_amount(item.amount)
    );
    if let Some(quantity) = item.quantity {
        let _ = write!(out, "  x{quantity}");
    }
    if let Some(parent) = item.parent_id() {
        let _ = write!(out, "  {parent}");
    }
    if !item.description.is_empty() {
        let _ = write!(out, "  {}", item.description);
    }
}

fn render_return(order_return: &OrderReturn) -> String {
    let mut out = format!(
        "{}  refunded {}",
        order_return.id,
        order_return.currency.format_amount(order_return.amount)
    );
    if let Some(order) = &order_return.order {
        let _ = write!(out, "  for {}", order.id());
    }
    if let Some(refund) = &order_return.refund {
        let _ = write!(out, "  ({refund})");
    }
    out
}
