//! Portfolio, positions and operations history.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::client::{CallContext, ResponseStream};
use crate::domain::to_timestamp;
use crate::error::Result;
use crate::ports::PositionReader;
use crate::proto::{
    OperationState, OperationsRequest, OperationsResponse, PortfolioRequest, PortfolioResponse,
    PortfolioStreamRequest, PortfolioStreamResponse, PositionsRequest, PositionsResponse,
    PositionsStreamRequest, PositionsStreamResponse, WithdrawLimitsRequest,
    WithdrawLimitsResponse, operations_service_client::OperationsServiceClient,
    operations_stream_service_client::OperationsStreamServiceClient,
};
use crate::transport::AuthChannel;

/// Client for `OperationsService`.
///
/// Every method takes an account id; an empty one means the configured
/// account.
#[derive(Debug, Clone)]
pub struct OperationsService {
    ctx: CallContext,
}

impl OperationsService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> OperationsServiceClient<AuthChannel> {
        OperationsServiceClient::new(self.ctx.channel())
    }

    /// Portfolio valuation and positions.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_portfolio(&self, account_id: &str) -> Result<PortfolioResponse> {
        let request = PortfolioRequest {
            account_id: self.ctx.account_id(account_id),
        };

        self.ctx
            .unary("GetPortfolio", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_portfolio(request).await }
            })
            .await
    }

    /// Money, securities and futures balances.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_positions(&self, account_id: &str) -> Result<PositionsResponse> {
        let request = PositionsRequest {
            account_id: self.ctx.account_id(account_id),
        };

        self.ctx
            .unary("GetPositions", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_positions(request).await }
            })
            .await
    }

    /// Operations in `[from, to]`, optionally for one FIGI.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_operations(
        &self,
        account_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        state: OperationState,
        figi: Option<&str>,
    ) -> Result<OperationsResponse> {
        let request = OperationsRequest {
            account_id: self.ctx.account_id(account_id),
            from: Some(to_timestamp(from)),
            to: Some(to_timestamp(to)),
            state: state.into(),
            figi: figi.unwrap_or_default().to_string(),
        };

        self.ctx
            .unary("GetOperations", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_operations(request).await }
            })
            .await
    }

    /// Money available for withdrawal.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_withdraw_limits(&self, account_id: &str) -> Result<WithdrawLimitsResponse> {
        let request = WithdrawLimitsRequest {
            account_id: self.ctx.account_id(account_id),
        };

        self.ctx
            .unary("GetWithdrawLimits", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_withdraw_limits(request).await }
            })
            .await
    }
}

#[async_trait]
impl PositionReader for OperationsService {
    async fn get_positions(&self, account_id: &str) -> Result<PositionsResponse> {
        Self::get_positions(self, account_id).await
    }
}

/// Balance of one security on an account, zero when not held.
///
/// # Errors
///
/// Returns the positions call's error.
pub async fn security_balance<P>(reader: &P, account_id: &str, instrument_uid: &str) -> Result<i64>
where
    P: PositionReader + ?Sized,
{
    let positions = reader.get_positions(account_id).await?;
    Ok(positions
        .securities
        .iter()
        .filter(|security| security.instrument_uid == instrument_uid)
        .map(|security| security.balance)
        .sum())
}

/// Client for `OperationsStreamService`.
#[derive(Debug, Clone)]
pub struct OperationsStreamService {
    ctx: CallContext,
}

impl OperationsStreamService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> OperationsStreamServiceClient<AuthChannel> {
        OperationsStreamServiceClient::new(self.ctx.channel())
    }

    /// Portfolio updates for `accounts` (empty means the configured account).
    ///
    /// # Errors
    ///
    /// Returns error if the stream cannot be opened.
    pub async fn portfolio_stream(
        &self,
        accounts: Vec<String>,
    ) -> Result<ResponseStream<PortfolioStreamResponse>> {
        let request = PortfolioStreamRequest {
            accounts: super::accounts_or_default(&self.ctx, accounts),
        };

        self.ctx
            .open_stream("PortfolioStream", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.portfolio_stream(request).await }
            })
            .await
    }

    /// Position changes for `accounts` (empty means the configured account).
    ///
    /// # Errors
    ///
    /// Returns error if the stream cannot be opened.
    pub async fn positions_stream(
        &self,
        accounts: Vec<String>,
    ) -> Result<ResponseStream<PositionsStreamResponse>> {
        let request = PositionsStreamRequest {
            accounts: super::accounts_or_default(&self.ctx, accounts),
        };

        self.ctx
            .open_stream("PositionsStream", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.positions_stream(request).await }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockPositionReader;
    use crate::proto::PositionsSecurities;

    fn security(uid: &str, balance: i64) -> PositionsSecurities {
        PositionsSecurities {
            instrument_uid: uid.to_string(),
            balance,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn balance_of_held_security() {
        let mut reader = MockPositionReader::new();
        reader
            .expect_get_positions()
            .withf(|account_id| account_id == "acc-1")
            .times(1)
            .returning(|_| {
                Ok(PositionsResponse {
                    securities: vec![security("uid-other", 7), security("uid-1", 10)],
                    ..Default::default()
                })
            });

        assert_eq!(security_balance(&reader, "acc-1", "uid-1").await.unwrap(), 10);
    }

    #[tokio::test]
    async fn missing_security_is_zero() {
        let mut reader = MockPositionReader::new();
        reader
            .expect_get_positions()
            .returning(|_| Ok(PositionsResponse::default()));

        assert_eq!(security_balance(&reader, "acc-1", "uid-1").await.unwrap(), 0);
    }
}
