//! Order endpoints.

use paydesk_core::{
    List, Order, OrderId, OrderListParams, OrderParams, OrderPayParams, OrderReturn,
    OrderReturnParams, OrderUpdateParams, Params,
};
use tracing::instrument;

use crate::client::Client;
use crate::error::ClientError;

impl Client {
    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API rejects the parameters.
    #[instrument(skip(self, params), fields(items = params.items.len()))]
    pub async fn create_order(&self, params: &OrderParams) -> Result<Order, ClientError> {
        self.post(&["orders"], params).await
    }

    /// Retrieve an order. Use `params.expand` to expand references such as
    /// `customer` or `items.parent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the order does not exist.
    #[instrument(skip(self, params), fields(order_id = %id))]
    pub async fn get_order(&self, id: &OrderId, params: &Params) -> Result<Order, ClientError> {
        self.get(&["orders", id.as_str()], params).await
    }

    /// Update an order's coupon, shipping selection, tracking or status.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API rejects the update.
    #[instrument(skip(self, params), fields(order_id = %id))]
    pub async fn update_order(
        &self,
        id: &OrderId,
        params: &OrderUpdateParams,
    ) -> Result<Order, ClientError> {
        self.post(&["orders", id.as_str()], params).await
    }

    /// Pay an order with a customer's default source or the given source.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payment is declined.
    #[instrument(skip(self, params), fields(order_id = %id))]
    pub async fn pay_order(
        &self,
        id: &OrderId,
        params: &OrderPayParams,
    ) -> Result<Order, ClientError> {
        self.post(&["orders", id.as_str(), "pay"], params).await
    }

    /// Return some or all items of a paid order.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the order cannot be returned.
    #[instrument(skip(self, params), fields(order_id = %id, items = params.items.len()))]
    pub async fn return_order(
        &self,
        id: &OrderId,
        params: &OrderReturnParams,
    ) -> Result<OrderReturn, ClientError> {
        self.post(&["orders", id.as_str(), "returns"], params).await
    }

    /// List orders, most recent first.
    ///
    /// Returns one page; pass [`List::last_id`] as `starting_after` for the next.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, params))]
    pub async fn list_orders(&self, params: &OrderListParams) -> Result<List<Order>, ClientError> {
        self.get(&["orders"], params).await
    }
}
