//! Orders service: placement, cancellation, state and replacement.

use async_trait::async_trait;

use crate::client::{CallContext, ResponseStream};
use crate::domain::{create_uid, ensure_order_id};
use crate::error::{ClientError, Result};
use crate::ports::OrderPlacer;
use crate::proto::{
    CancelOrderRequest, CancelOrderResponse, GetOrderStateRequest, GetOrdersRequest,
    OrderDirection, OrderState, OrderType, PostOrderRequest, PostOrderResponse, PriceType,
    Quotation, ReplaceOrderRequest, TradesStreamRequest, TradesStreamResponse,
    orders_service_client::OrdersServiceClient,
    orders_stream_service_client::OrdersStreamServiceClient,
};
use crate::transport::AuthChannel;

/// Order parameters without the direction.
///
/// An empty `order_id` gets a fresh idempotency key; an empty `account_id`
/// falls back to the configured account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostOrderRequestShort {
    /// Instrument uid or FIGI.
    pub instrument_id: String,
    /// Lots.
    pub quantity: i64,
    /// Limit price per instrument; `None` for market orders.
    pub price: Option<Quotation>,
    /// Account to trade on.
    pub account_id: String,
    /// Market, limit or best price.
    pub order_type: OrderType,
    /// Idempotency key.
    pub order_id: String,
}

impl PostOrderRequestShort {
    /// Market order for `quantity` lots.
    #[must_use]
    pub fn market(instrument_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            quantity,
            order_type: OrderType::Market,
            ..Default::default()
        }
    }

    /// Limit order for `quantity` lots at `price`.
    #[must_use]
    pub fn limit(instrument_id: impl Into<String>, quantity: i64, price: Quotation) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            quantity,
            price: Some(price),
            order_type: OrderType::Limit,
            ..Default::default()
        }
    }

    /// Set the account.
    #[must_use]
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// Set the idempotency key.
    #[must_use]
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = order_id.into();
        self
    }

    /// Wire request in the given direction.
    #[must_use]
    pub fn into_request(self, direction: OrderDirection) -> PostOrderRequest {
        PostOrderRequest {
            figi: None,
            quantity: self.quantity,
            price: self.price,
            direction: direction.into(),
            account_id: self.account_id,
            order_type: self.order_type.into(),
            order_id: self.order_id,
            instrument_id: self.instrument_id,
        }
    }
}

/// Client for `OrdersService`.
#[derive(Debug, Clone)]
pub struct OrdersService {
    ctx: CallContext,
}

impl OrdersService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> OrdersServiceClient<AuthChannel> {
        OrdersServiceClient::new(self.ctx.channel())
    }

    /// Place an order.
    ///
    /// The idempotency key is fixed before the first attempt, so retries
    /// cannot place a second order.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn post_order(&self, request: PostOrderRequest) -> Result<PostOrderResponse> {
        let mut request = request;
        request.account_id = self.ctx.account_id(&request.account_id);
        request.order_id = ensure_order_id(request.order_id);

        self.ctx
            .unary("PostOrder", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.post_order(request).await }
            })
            .await
    }

    /// Buy order.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn buy(&self, order: PostOrderRequestShort) -> Result<PostOrderResponse> {
        self.post_order(order.into_request(OrderDirection::Buy))
            .await
    }

    /// Sell order.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn sell(&self, order: PostOrderRequestShort) -> Result<PostOrderResponse> {
        self.post_order(order.into_request(OrderDirection::Sell))
            .await
    }

    /// Cancel an active order.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn cancel_order(
        &self,
        account_id: &str,
        order_id: &str,
    ) -> Result<CancelOrderResponse> {
        let request = CancelOrderRequest {
            account_id: self.ctx.account_id(account_id),
            order_id: order_id.to_string(),
        };

        self.ctx
            .unary("CancelOrder", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.cancel_order(request).await }
            })
            .await
    }

    /// State of one order.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_order_state(&self, account_id: &str, order_id: &str) -> Result<OrderState> {
        let request = GetOrderStateRequest {
            account_id: self.ctx.account_id(account_id),
            order_id: order_id.to_string(),
        };

        self.ctx
            .unary("GetOrderState", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_order_state(request).await }
            })
            .await
    }

    /// Active orders of an account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_orders(&self, account_id: &str) -> Result<Vec<OrderState>> {
        let request = GetOrdersRequest {
            account_id: self.ctx.account_id(account_id),
        };

        let response = self
            .ctx
            .unary("GetOrders", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_orders(request).await }
            })
            .await?;
        Ok(response.orders)
    }

    /// Change quantity and price of an active order.
    ///
    /// An empty `idempotency_key` gets a fresh one.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn replace_order(&self, request: ReplaceOrderRequest) -> Result<PostOrderResponse> {
        let mut request = request;
        request.account_id = self.ctx.account_id(&request.account_id);
        request.idempotency_key = ensure_order_id(request.idempotency_key);
        if request.price.is_some() && request.price_type.is_none() {
            request.price_type = Some(PriceType::Currency.into());
        }

        self.ctx
            .unary("ReplaceOrder", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.replace_order(request).await }
            })
            .await
    }
}

#[async_trait]
impl OrderPlacer for OrdersService {
    async fn buy(&self, order: PostOrderRequestShort) -> Result<PostOrderResponse> {
        Self::buy(self, order).await
    }

    async fn sell(&self, order: PostOrderRequestShort) -> Result<PostOrderResponse> {
        Self::sell(self, order).await
    }
}

/// Flatten a position of `lots` with a market order in the opposite
/// direction; `None` when already flat.
///
/// # Errors
///
/// Returns [`ClientError::InvalidArgument`] if `lots` has no positive
/// counterpart, otherwise the order call's error.
pub async fn close_position<O>(
    placer: &O,
    instrument_id: &str,
    lots: i64,
) -> Result<Option<PostOrderResponse>>
where
    O: OrderPlacer + ?Sized,
{
    let quantity = lots
        .checked_abs()
        .ok_or_else(|| ClientError::invalid_argument(format!("cannot close {lots} lots")))?;
    let order = PostOrderRequestShort::market(instrument_id, quantity).with_order_id(create_uid());

    match lots.signum() {
        1 => placer.sell(order).await.map(Some),
        -1 => placer.buy(order).await.map(Some),
        _ => Ok(None),
    }
}

/// Client for `OrdersStreamService`.
#[derive(Debug, Clone)]
pub struct OrdersStreamService {
    ctx: CallContext,
}

impl OrdersStreamService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    /// Executed trades on `accounts` (empty means the configured account).
    ///
    /// # Errors
    ///
    /// Returns error if the stream cannot be opened.
    pub async fn trades_stream(
        &self,
        accounts: Vec<String>,
    ) -> Result<ResponseStream<TradesStreamResponse>> {
        let request = TradesStreamRequest {
            accounts: super::accounts_or_default(&self.ctx, accounts),
        };

        self.ctx
            .open_stream("TradesStream", || {
                let mut stub = OrdersStreamServiceClient::new(self.ctx.channel());
                let request = request.clone();
                async move { stub.trades_stream(request).await }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockOrderPlacer;

    #[test]
    fn short_request_keeps_fields_and_sets_direction() {
        let request = PostOrderRequestShort::limit("uid-1", 3, Quotation::new(101, 500_000_000))
            .with_account_id("acc")
            .with_order_id("key")
            .into_request(OrderDirection::Sell);

        assert_eq!(request.instrument_id, "uid-1");
        assert_eq!(request.quantity, 3);
        assert_eq!(request.price, Some(Quotation::new(101, 500_000_000)));
        assert_eq!(request.direction, i32::from(OrderDirection::Sell));
        assert_eq!(request.order_type, i32::from(OrderType::Limit));
        assert_eq!(request.account_id, "acc");
        assert_eq!(request.order_id, "key");
        assert!(request.figi.is_none());
    }

    #[test]
    fn market_order_has_no_price() {
        let request = PostOrderRequestShort::market("uid-1", 1).into_request(OrderDirection::Buy);
        assert!(request.price.is_none());
        assert_eq!(request.order_type, i32::from(OrderType::Market));
        assert!(request.order_id.is_empty());
    }

    fn filled(order_id: &str) -> PostOrderResponse {
        PostOrderResponse {
            order_id: order_id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn long_position_closes_with_sell() {
        let mut placer = MockOrderPlacer::new();
        placer.expect_buy().never();
        placer
            .expect_sell()
            .withf(|order| {
                order.instrument_id == "uid-1"
                    && order.quantity == 3
                    && order.order_type == OrderType::Market
                    && !order.order_id.is_empty()
            })
            .times(1)
            .returning(|_| Ok(filled("sell-1")));

        let response = close_position(&placer, "uid-1", 3).await.unwrap();
        assert_eq!(response.unwrap().order_id, "sell-1");
    }

    #[tokio::test]
    async fn short_position_closes_with_buy() {
        let mut placer = MockOrderPlacer::new();
        placer.expect_sell().never();
        placer
            .expect_buy()
            .withf(|order| order.quantity == 2)
            .times(1)
            .returning(|_| Ok(filled("buy-1")));

        let response = close_position(&placer, "uid-1", -2).await.unwrap();
        assert_eq!(response.unwrap().order_id, "buy-1");
    }

    #[tokio::test]
    async fn flat_position_places_nothing() {
        let mut placer = MockOrderPlacer::new();
        placer.expect_buy().never();
        placer.expect_sell().never();

        assert!(close_position(&placer, "uid-1", 0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unrepresentable_position_is_invalid_argument() {
        let placer = MockOrderPlacer::new();
        let err = close_position(&placer, "uid-1", i64::MIN).await.unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);
    }
}
