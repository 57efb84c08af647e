//! Market data: snapshots and subscriptions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::Stream;

use crate::client::{CallContext, ResponseStream};
use crate::domain::to_timestamp;
use crate::error::Result;
use crate::ports::LastPriceReader;
use crate::proto::{
    CandleInstrument, CandleInterval, GetCandlesRequest, GetCandlesResponse, GetLastPricesRequest,
    GetLastPricesResponse, GetLastTradesRequest, GetLastTradesResponse, GetMySubscriptions,
    GetOrderBookRequest, GetOrderBookResponse, GetTradingStatusRequest,
    GetTradingStatusResponse, InfoInstrument, LastPriceInstrument, MarketDataRequest,
    MarketDataResponse, MarketDataServerSideStreamRequest, OrderBookInstrument, Quotation,
    SubscribeCandlesRequest, SubscribeInfoRequest, SubscribeLastPriceRequest,
    SubscribeOrderBookRequest, SubscribeTradesRequest, SubscriptionAction, SubscriptionInterval,
    TradeInstrument, market_data_request::Payload,
    market_data_service_client::MarketDataServiceClient,
    market_data_stream_service_client::MarketDataStreamServiceClient,
};
use crate::transport::AuthChannel;

/// Client for `MarketDataService`.
#[derive(Debug, Clone)]
pub struct MarketDataService {
    ctx: CallContext,
}

impl MarketDataService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> MarketDataServiceClient<AuthChannel> {
        MarketDataServiceClient::new(self.ctx.channel())
    }

    /// Historic candles of one instrument in `[from, to)`.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_candles(
        &self,
        instrument_id: &str,
        interval: CandleInterval,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<GetCandlesResponse> {
        let request = GetCandlesRequest {
            figi: None,
            from: Some(to_timestamp(from)),
            to: Some(to_timestamp(to)),
            interval: interval.into(),
            instrument_id: Some(instrument_id.to_string()),
        };

        self.ctx
            .unary("GetCandles", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_candles(request).await }
            })
            .await
    }

    /// Last trade prices by instrument uid or FIGI.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_last_prices(&self, instrument_ids: Vec<String>) -> Result<GetLastPricesResponse> {
        let request = GetLastPricesRequest {
            figi: Vec::new(),
            instrument_id: instrument_ids,
        };

        self.ctx
            .unary("GetLastPrices", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_last_prices(request).await }
            })
            .await
    }

    /// Order book snapshot with `depth` levels per side.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_order_book(&self, instrument_id: &str, depth: i32) -> Result<GetOrderBookResponse> {
        let request = GetOrderBookRequest {
            figi: None,
            depth,
            instrument_id: Some(instrument_id.to_string()),
        };

        self.ctx
            .unary("GetOrderBook", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_order_book(request).await }
            })
            .await
    }

    /// Trading status of one instrument.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_trading_status(&self, instrument_id: &str) -> Result<GetTradingStatusResponse> {
        let request = GetTradingStatusRequest {
            figi: None,
            instrument_id: Some(instrument_id.to_string()),
        };

        self.ctx
            .unary("GetTradingStatus", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_trading_status(request).await }
            })
            .await
    }

    /// Anonymous trades of one instrument in `[from, to)`.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_last_trades(
        &self,
        instrument_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<GetLastTradesResponse> {
        let request = GetLastTradesRequest {
            figi: None,
            from: Some(to_timestamp(from)),
            to: Some(to_timestamp(to)),
            instrument_id: Some(instrument_id.to_string()),
        };

        self.ctx
            .unary("GetLastTrades", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_last_trades(request).await }
            })
            .await
    }
}

#[async_trait]
impl LastPriceReader for MarketDataService {
    async fn get_last_prices(&self, instrument_ids: Vec<String>) -> Result<GetLastPricesResponse> {
        Self::get_last_prices(self, instrument_ids).await
    }
}

/// Last price of one instrument, matched by uid or FIGI.
///
/// # Errors
///
/// Returns the price call's error.
pub async fn last_price<L>(reader: &L, instrument_id: &str) -> Result<Option<Quotation>>
where
    L: LastPriceReader + ?Sized,
{
    let response = reader.get_last_prices(vec![instrument_id.to_string()]).await?;
    Ok(response
        .last_prices
        .into_iter()
        .find(|price| price.instrument_uid == instrument_id || price.figi == instrument_id)
        .and_then(|price| price.price))
}

/// Client for `MarketDataStreamService`.
#[derive(Debug, Clone)]
pub struct MarketDataStreamService {
    ctx: CallContext,
}

impl MarketDataStreamService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> MarketDataStreamServiceClient<AuthChannel> {
        MarketDataStreamServiceClient::new(self.ctx.channel())
    }

    /// Server-side subscription stream; the open is retried.
    ///
    /// # Errors
    ///
    /// Returns error if the stream cannot be opened.
    pub async fn server_side_stream(
        &self,
        request: MarketDataServerSideStreamRequest,
    ) -> Result<ResponseStream<MarketDataResponse>> {
        self.ctx
            .open_stream("MarketDataServerSideStream", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.market_data_server_side_stream(request).await }
            })
            .await
    }

    /// Bidirectional subscription stream driven by `requests`.
    ///
    /// Opened once; the request side cannot be replayed, so it is not retried.
    ///
    /// # Errors
    ///
    /// Returns error if the stream cannot be opened.
    pub async fn market_data_stream<S>(&self, requests: S) -> Result<ResponseStream<MarketDataResponse>>
    where
        S: Stream<Item = MarketDataRequest> + Send + 'static,
    {
        let mut stub = self.stub();
        self.ctx
            .open_bidi("MarketDataStream", async move {
                stub.market_data_stream(requests).await
            })
            .await
    }
}

// ============================================
// Subscription Requests
// ============================================

/// Last price subscription for `instrument_ids`.
#[must_use]
pub fn last_price_request(action: SubscriptionAction, instrument_ids: &[String]) -> MarketDataRequest {
    request(Payload::SubscribeLastPriceRequest(SubscribeLastPriceRequest {
        subscription_action: action.into(),
        instruments: last_price_instruments(instrument_ids),
    }))
}

/// Order book subscription with `depth` levels.
#[must_use]
pub fn order_book_request(
    action: SubscriptionAction,
    instrument_ids: &[String],
    depth: i32,
) -> MarketDataRequest {
    request(Payload::SubscribeOrderBookRequest(SubscribeOrderBookRequest {
        subscription_action: action.into(),
        instruments: instrument_ids
            .iter()
            .map(|id| OrderBookInstrument {
                figi: String::new(),
                depth,
                instrument_id: id.clone(),
            })
            .collect(),
    }))
}

/// Anonymous trades subscription.
#[must_use]
pub fn trades_request(action: SubscriptionAction, instrument_ids: &[String]) -> MarketDataRequest {
    request(Payload::SubscribeTradesRequest(SubscribeTradesRequest {
        subscription_action: action.into(),
        instruments: instrument_ids
            .iter()
            .map(|id| TradeInstrument {
                figi: String::new(),
                instrument_id: id.clone(),
            })
            .collect(),
    }))
}

/// Candle subscription; `waiting_close` delivers only closed candles.
#[must_use]
pub fn candles_request(
    action: SubscriptionAction,
    instrument_ids: &[String],
    interval: SubscriptionInterval,
    waiting_close: bool,
) -> MarketDataRequest {
    request(Payload::SubscribeCandlesRequest(SubscribeCandlesRequest {
        subscription_action: action.into(),
        instruments: instrument_ids
            .iter()
            .map(|id| CandleInstrument {
                figi: String::new(),
                interval: interval.into(),
                instrument_id: id.clone(),
            })
            .collect(),
        waiting_close,
    }))
}

/// Trading status subscription.
#[must_use]
pub fn info_request(action: SubscriptionAction, instrument_ids: &[String]) -> MarketDataRequest {
    request(Payload::SubscribeInfoRequest(SubscribeInfoRequest {
        subscription_action: action.into(),
        instruments: instrument_ids
            .iter()
            .map(|id| InfoInstrument {
                figi: String::new(),
                instrument_id: id.clone(),
            })
            .collect(),
    }))
}

/// Ask the server for the stream's active subscriptions.
#[must_use]
pub const fn my_subscriptions_request() -> MarketDataRequest {
    MarketDataRequest {
        payload: Some(Payload::GetMySubscriptions(GetMySubscriptions {})),
    }
}

/// Server-side stream request subscribing to last prices.
#[must_use]
pub fn server_side_last_prices(instrument_ids: &[String]) -> MarketDataServerSideStreamRequest {
    MarketDataServerSideStreamRequest {
        subscribe_last_price_request: Some(SubscribeLastPriceRequest {
            subscription_action: SubscriptionAction::Subscribe.into(),
            instruments: last_price_instruments(instrument_ids),
        }),
        ..Default::default()
    }
}

fn last_price_instruments(instrument_ids: &[String]) -> Vec<LastPriceInstrument> {
    instrument_ids
        .iter()
        .map(|id| LastPriceInstrument {
            figi: String::new(),
            instrument_id: id.clone(),
        })
        .collect()
}

const fn request(payload: Payload) -> MarketDataRequest {
    MarketDataRequest {
        payload: Some(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockLastPriceReader;
    use crate::proto::LastPrice;

    fn ids() -> Vec<String> {
        vec!["uid-1".to_string(), "uid-2".to_string()]
    }

    #[test]
    fn last_price_request_lists_instruments() {
        let request = last_price_request(SubscriptionAction::Subscribe, &ids());
        let Some(Payload::SubscribeLastPriceRequest(inner)) = request.payload else {
            panic!("expected last price payload");
        };
        assert_eq!(inner.subscription_action, i32::from(SubscriptionAction::Subscribe));
        let got: Vec<&str> = inner.instruments.iter().map(|i| i.instrument_id.as_str()).collect();
        assert_eq!(got, vec!["uid-1", "uid-2"]);
    }

    #[test]
    fn order_book_request_carries_depth() {
        let request = order_book_request(SubscriptionAction::Unsubscribe, &ids(), 20);
        let Some(Payload::SubscribeOrderBookRequest(inner)) = request.payload else {
            panic!("expected order book payload");
        };
        assert_eq!(inner.subscription_action, i32::from(SubscriptionAction::Unsubscribe));
        assert!(inner.instruments.iter().all(|i| i.depth == 20));
    }

    #[test]
    fn candles_request_carries_interval() {
        let request = candles_request(
            SubscriptionAction::Subscribe,
            &ids(),
            SubscriptionInterval::FiveMinutes,
            true,
        );
        let Some(Payload::SubscribeCandlesRequest(inner)) = request.payload else {
            panic!("expected candles payload");
        };
        assert!(inner.waiting_close);
        assert!(
            inner
                .instruments
                .iter()
                .all(|i| i.interval == i32::from(SubscriptionInterval::FiveMinutes))
        );
    }

    #[test]
    fn server_side_request_only_sets_last_prices() {
        let request = server_side_last_prices(&ids());
        assert_eq!(request.subscribe_last_price_request.unwrap().instruments.len(), 2);
        assert!(request.subscribe_candles_request.is_none());
        assert!(request.subscribe_order_book_request.is_none());
    }

    #[tokio::test]
    async fn last_price_matches_uid_or_figi() {
        let mut reader = MockLastPriceReader::new();
        reader
            .expect_get_last_prices()
            .withf(|ids| ids == &["BBG004730N88".to_string()])
            .times(1)
            .returning(|_| {
                Ok(GetLastPricesResponse {
                    last_prices: vec![
                        LastPrice {
                            figi: "BBG000000001".to_string(),
                            price: Some(Quotation::new(1, 0)),
                            ..Default::default()
                        },
                        LastPrice {
                            figi: "BBG004730N88".to_string(),
                            instrument_uid: "uid-sber".to_string(),
                            price: Some(Quotation::new(271, 450_000_000)),
                            ..Default::default()
                        },
                    ],
                })
            });

        let price = last_price(&reader, "BBG004730N88").await.unwrap();
        assert_eq!(price, Some(Quotation::new(271, 450_000_000)));
    }

    #[tokio::test]
    async fn unknown_instrument_has_no_last_price() {
        let mut reader = MockLastPriceReader::new();
        reader
            .expect_get_last_prices()
            .returning(|_| Ok(GetLastPricesResponse::default()));

        assert!(last_price(&reader, "uid-1").await.unwrap().is_none());
    }
}
