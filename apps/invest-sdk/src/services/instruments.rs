//! Instrument lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::client::CallContext;
use crate::domain::to_timestamp;
use crate::error::Result;
use crate::ports::InstrumentFinder;
use crate::proto::{
    FindInstrumentRequest, FindInstrumentResponse, InstrumentIdType, InstrumentRequest,
    InstrumentResponse, TradingSchedulesRequest, TradingSchedulesResponse,
    instruments_service_client::InstrumentsServiceClient,
};
use crate::transport::AuthChannel;

/// Client for `InstrumentsService`.
#[derive(Debug, Clone)]
pub struct InstrumentsService {
    ctx: CallContext,
}

impl InstrumentsService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> InstrumentsServiceClient<AuthChannel> {
        InstrumentsServiceClient::new(self.ctx.channel())
    }

    /// Instruments matching a ticker, name, ISIN or FIGI fragment.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn find_instrument(&self, query: &str) -> Result<FindInstrumentResponse> {
        let request = FindInstrumentRequest {
            query: query.to_string(),
            instrument_kind: None,
            api_trade_available_flag: None,
        };

        self.ctx
            .unary("FindInstrument", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.find_instrument(request).await }
            })
            .await
    }

    /// Instrument by FIGI.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn instrument_by_figi(&self, figi: &str) -> Result<InstrumentResponse> {
        self.instrument_by(InstrumentIdType::Figi, figi, None).await
    }

    /// Instrument by uid.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn instrument_by_uid(&self, uid: &str) -> Result<InstrumentResponse> {
        self.instrument_by(InstrumentIdType::Uid, uid, None).await
    }

    /// Instrument by ticker on a trading board (e.g. `TQBR`).
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn instrument_by_ticker(
        &self,
        ticker: &str,
        class_code: &str,
    ) -> Result<InstrumentResponse> {
        self.instrument_by(InstrumentIdType::Ticker, ticker, Some(class_code))
            .await
    }

    async fn instrument_by(
        &self,
        id_type: InstrumentIdType,
        id: &str,
        class_code: Option<&str>,
    ) -> Result<InstrumentResponse> {
        let request = InstrumentRequest {
            id_type: id_type.into(),
            class_code: class_code.map(str::to_string),
            id: id.to_string(),
        };

        self.ctx
            .unary("GetInstrumentBy", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_instrument_by(request).await }
            })
            .await
    }

    /// Trading days of one exchange (or all when `None`) in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn trading_schedules(
        &self,
        exchange: Option<&str>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<TradingSchedulesResponse> {
        let request = TradingSchedulesRequest {
            exchange: exchange.map(str::to_string),
            from: Some(to_timestamp(from)),
            to: Some(to_timestamp(to)),
        };

        self.ctx
            .unary("TradingSchedules", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.trading_schedules(request).await }
            })
            .await
    }
}

#[async_trait]
impl InstrumentFinder for InstrumentsService {
    async fn find_instrument(&self, query: &str) -> Result<FindInstrumentResponse> {
        Self::find_instrument(self, query).await
    }
}

/// Uid of the first search hit whose ticker equals `ticker` exactly.
///
/// # Errors
///
/// Returns the search call's error.
pub async fn find_uid_by_ticker<F>(finder: &F, ticker: &str) -> Result<Option<String>>
where
    F: InstrumentFinder + ?Sized,
{
    let response = finder.find_instrument(ticker).await?;
    Ok(response
        .instruments
        .into_iter()
        .find(|instrument| instrument.ticker == ticker)
        .map(|instrument| instrument.uid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockInstrumentFinder;
    use crate::proto::InstrumentShort;

    fn short(ticker: &str, uid: &str) -> InstrumentShort {
        InstrumentShort {
            ticker: ticker.to_string(),
            uid: uid.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn picks_exact_ticker_match() {
        let mut finder = MockInstrumentFinder::new();
        finder
            .expect_find_instrument()
            .withf(|query| query == "TCSG")
            .times(1)
            .returning(|_| {
                Ok(FindInstrumentResponse {
                    instruments: vec![short("TCSGX", "uid-fund"), short("TCSG", "uid-share")],
                })
            });

        let uid = find_uid_by_ticker(&finder, "TCSG").await.unwrap();
        assert_eq!(uid.as_deref(), Some("uid-share"));
    }

    #[tokio::test]
    async fn no_exact_match_is_none() {
        let mut finder = MockInstrumentFinder::new();
        finder.expect_find_instrument().returning(|_| {
            Ok(FindInstrumentResponse {
                instruments: vec![short("TCSGX", "uid-fund")],
            })
        });

        assert!(find_uid_by_ticker(&finder, "TCSG").await.unwrap().is_none());
    }
}
