//! Stop orders.

use chrono::{DateTime, Utc};

use crate::client::CallContext;
use crate::domain::to_timestamp;
use crate::error::{ClientError, Result};
use crate::proto::{
    CancelStopOrderRequest, CancelStopOrderResponse, GetStopOrdersRequest, PostStopOrderRequest,
    PostStopOrderResponse, Quotation, StopOrder, StopOrderDirection, StopOrderExpirationType,
    StopOrderType, stop_orders_service_client::StopOrdersServiceClient,
};
use crate::transport::AuthChannel;

/// Stop order parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PostStopOrderRequestShort {
    /// Instrument uid or FIGI.
    pub instrument_id: String,
    /// Lots.
    pub quantity: i64,
    /// Execution price for stop-limit orders.
    pub price: Option<Quotation>,
    /// Activation price.
    pub stop_price: Quotation,
    /// Buy or sell.
    pub direction: StopOrderDirection,
    /// Account to trade on (empty means the configured account).
    pub account_id: String,
    /// Take profit, stop loss or stop limit.
    pub stop_order_type: StopOrderType,
    /// Expiry; `None` keeps the order until cancelled.
    pub expire_date: Option<DateTime<Utc>>,
}

impl PostStopOrderRequestShort {
    fn into_request(self, account_id: String) -> Result<PostStopOrderRequest> {
        if self.stop_order_type == StopOrderType::StopLimit && self.price.is_none() {
            return Err(ClientError::invalid_argument(
                "stop limit order needs an execution price",
            ));
        }

        let expiration_type = if self.expire_date.is_some() {
            StopOrderExpirationType::GoodTillDate
        } else {
            StopOrderExpirationType::GoodTillCancel
        };

        Ok(PostStopOrderRequest {
            figi: None,
            quantity: self.quantity,
            price: self.price,
            stop_price: Some(self.stop_price),
            direction: self.direction.into(),
            account_id,
            expiration_type: expiration_type.into(),
            stop_order_type: self.stop_order_type.into(),
            expire_date: self.expire_date.map(to_timestamp),
            instrument_id: self.instrument_id,
        })
    }
}

/// Client for `StopOrdersService`.
#[derive(Debug, Clone)]
pub struct StopOrdersService {
    ctx: CallContext,
}

impl StopOrdersService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> StopOrdersServiceClient<AuthChannel> {
        StopOrdersServiceClient::new(self.ctx.channel())
    }

    /// Place a stop order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for a stop limit order without
    /// a price, otherwise the call's error after retries.
    pub async fn post_stop_order(
        &self,
        order: PostStopOrderRequestShort,
    ) -> Result<PostStopOrderResponse> {
        let account_id = self.ctx.account_id(&order.account_id);
        let request = order.into_request(account_id)?;

        self.ctx
            .unary("PostStopOrder", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.post_stop_order(request).await }
            })
            .await
    }

    /// Active stop orders of an account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_stop_orders(&self, account_id: &str) -> Result<Vec<StopOrder>> {
        let request = GetStopOrdersRequest {
            account_id: self.ctx.account_id(account_id),
        };

        let response = self
            .ctx
            .unary("GetStopOrders", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_stop_orders(request).await }
            })
            .await?;
        Ok(response.stop_orders)
    }

    /// Cancel a stop order.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn cancel_stop_order(
        &self,
        account_id: &str,
        stop_order_id: &str,
    ) -> Result<CancelStopOrderResponse> {
        let request = CancelStopOrderRequest {
            account_id: self.ctx.account_id(account_id),
            stop_order_id: stop_order_id.to_string(),
        };

        self.ctx
            .unary("CancelStopOrder", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.cancel_stop_order(request).await }
            })
            .await
    }
}
