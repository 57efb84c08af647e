//! Sandbox: virtual accounts for testing strategies.
//!
//! Sandbox orders, positions and portfolio mirror the production services
//! but act on accounts opened here.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::client::CallContext;
use crate::domain::ensure_order_id;
use crate::error::{ClientError, Result};
use crate::ports::SandboxAccounts;
use crate::proto::{
    CancelOrderRequest, CancelOrderResponse, CloseSandboxAccountRequest,
    CloseSandboxAccountResponse, GetAccountsRequest, GetAccountsResponse, GetOrdersRequest,
    MoneyValue, OpenSandboxAccountRequest, OpenSandboxAccountResponse, OrderState,
    PortfolioRequest, PortfolioResponse, PositionsRequest, PositionsResponse, PostOrderRequest,
    PostOrderResponse, SandboxPayInRequest, SandboxPayInResponse,
    sandbox_service_client::SandboxServiceClient,
};
use crate::transport::AuthChannel;

/// Amount to credit to a sandbox account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxPayInRequestShort {
    /// Account to credit (empty means the configured account).
    pub account_id: String,
    /// ISO currency code, e.g. `RUB`.
    pub currency: String,
    /// Whole units.
    pub units: i64,
    /// Billionths of a unit.
    pub nano: i32,
}

impl SandboxPayInRequestShort {
    /// Credit `units` whole units of `currency`.
    #[must_use]
    pub fn new(account_id: impl Into<String>, currency: impl Into<String>, units: i64) -> Self {
        Self {
            account_id: account_id.into(),
            currency: currency.into(),
            units,
            nano: 0,
        }
    }

    /// Credit a decimal amount of `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if the amount does not fit the
    /// wire format.
    pub fn from_decimal(
        account_id: impl Into<String>,
        currency: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self> {
        let money = MoneyValue::from_decimal(currency, amount)
            .map_err(|e| ClientError::invalid_argument(e.to_string()))?;
        Ok(Self {
            account_id: account_id.into(),
            currency: money.currency,
            units: money.units,
            nano: money.nano,
        })
    }
}

/// Client for `SandboxService`.
#[derive(Debug, Clone)]
pub struct SandboxService {
    ctx: CallContext,
}

impl SandboxService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> SandboxServiceClient<AuthChannel> {
        SandboxServiceClient::new(self.ctx.channel())
    }

    /// Open a sandbox account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn open_sandbox_account(&self) -> Result<OpenSandboxAccountResponse> {
        self.ctx
            .unary("OpenSandboxAccount", || {
                let mut stub = self.stub();
                async move {
                    stub.open_sandbox_account(OpenSandboxAccountRequest { name: None })
                        .await
                }
            })
            .await
    }

    /// Sandbox accounts of the token.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_sandbox_accounts(&self) -> Result<GetAccountsResponse> {
        self.ctx
            .unary("GetSandboxAccounts", || {
                let mut stub = self.stub();
                async move { stub.get_sandbox_accounts(GetAccountsRequest {}).await }
            })
            .await
    }

    /// Close a sandbox account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn close_sandbox_account(&self, account_id: &str) -> Result<CloseSandboxAccountResponse> {
        let request = CloseSandboxAccountRequest {
            account_id: self.ctx.account_id(account_id),
        };

        self.ctx
            .unary("CloseSandboxAccount", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.close_sandbox_account(request).await }
            })
            .await
    }

    /// Credit a sandbox account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn sandbox_pay_in(
        &self,
        request: SandboxPayInRequestShort,
    ) -> Result<SandboxPayInResponse> {
        let request = SandboxPayInRequest {
            account_id: self.ctx.account_id(&request.account_id),
            amount: Some(MoneyValue::new(request.currency, request.units, request.nano)),
        };

        self.ctx
            .unary("SandboxPayIn", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.sandbox_pay_in(request).await }
            })
            .await
    }

    /// Place an order on a sandbox account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn post_sandbox_order(&self, request: PostOrderRequest) -> Result<PostOrderResponse> {
        let mut request = request;
        request.account_id = self.ctx.account_id(&request.account_id);
        request.order_id = ensure_order_id(request.order_id);

        self.ctx
            .unary("PostSandboxOrder", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.post_sandbox_order(request).await }
            })
            .await
    }

    /// Active orders of a sandbox account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_sandbox_orders(&self, account_id: &str) -> Result<Vec<OrderState>> {
        let request = GetOrdersRequest {
            account_id: self.ctx.account_id(account_id),
        };

        let response = self
            .ctx
            .unary("GetSandboxOrders", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_sandbox_orders(request).await }
            })
            .await?;
        Ok(response.orders)
    }

    /// Cancel a sandbox order.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn cancel_sandbox_order(
        &self,
        account_id: &str,
        order_id: &str,
    ) -> Result<CancelOrderResponse> {
        let request = CancelOrderRequest {
            account_id: self.ctx.account_id(account_id),
            order_id: order_id.to_string(),
        };

        self.ctx
            .unary("CancelSandboxOrder", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.cancel_sandbox_order(request).await }
            })
            .await
    }

    /// Positions of a sandbox account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_sandbox_positions(&self, account_id: &str) -> Result<PositionsResponse> {
        let request = PositionsRequest {
            account_id: self.ctx.account_id(account_id),
        };

        self.ctx
            .unary("GetSandboxPositions", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_sandbox_positions(request).await }
            })
            .await
    }

    /// Portfolio of a sandbox account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_sandbox_portfolio(&self, account_id: &str) -> Result<PortfolioResponse> {
        let request = PortfolioRequest {
            account_id: self.ctx.account_id(account_id),
        };

        self.ctx
            .unary("GetSandboxPortfolio", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_sandbox_portfolio(request).await }
            })
            .await
    }

    /// Reuse the first sandbox account or open one, and make it the
    /// configured account.
    ///
    /// # Errors
    ///
    /// Returns the error of the listing or opening call.
    pub async fn ensure_sandbox_account(&self) -> Result<String> {
        let account_id = ensure_sandbox_account(self).await?;
        self.ctx.config().set_account_id(account_id.clone());
        Ok(account_id)
    }
}

#[async_trait]
impl SandboxAccounts for SandboxService {
    async fn get_sandbox_accounts(&self) -> Result<GetAccountsResponse> {
        Self::get_sandbox_accounts(self).await
    }

    async fn open_sandbox_account(&self) -> Result<OpenSandboxAccountResponse> {
        Self::open_sandbox_account(self).await
    }

    async fn sandbox_pay_in(
        &self,
        request: SandboxPayInRequestShort,
    ) -> Result<SandboxPayInResponse> {
        Self::sandbox_pay_in(self, request).await
    }
}

/// Id of the first existing sandbox account, or of a newly opened one.
///
/// # Errors
///
/// Returns the error of the listing or opening call.
pub async fn ensure_sandbox_account<S>(sandbox: &S) -> Result<String>
where
    S: SandboxAccounts + ?Sized,
{
    let accounts = sandbox.get_sandbox_accounts().await?.accounts;
    if let Some(account) = accounts.into_iter().next() {
        tracing::debug!(account_id = %account.id, "reusing sandbox account");
        return Ok(account.id);
    }

    let opened = sandbox.open_sandbox_account().await?;
    tracing::info!(account_id = %opened.account_id, "opened sandbox account");
    Ok(opened.account_id)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ports::MockSandboxAccounts;
    use crate::proto::Account;

    fn account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn reuses_first_existing_account() {
        let mut sandbox = MockSandboxAccounts::new();
        sandbox.expect_get_sandbox_accounts().times(1).returning(|| {
            Ok(GetAccountsResponse {
                accounts: vec![account("sb-1"), account("sb-2")],
            })
        });
        sandbox.expect_open_sandbox_account().never();

        assert_eq!(ensure_sandbox_account(&sandbox).await.unwrap(), "sb-1");
    }

    #[tokio::test]
    async fn opens_account_when_none_exist() {
        let mut sandbox = MockSandboxAccounts::new();
        sandbox
            .expect_get_sandbox_accounts()
            .returning(|| Ok(GetAccountsResponse::default()));
        sandbox.expect_open_sandbox_account().times(1).returning(|| {
            Ok(OpenSandboxAccountResponse {
                account_id: "sb-new".to_string(),
            })
        });

        assert_eq!(ensure_sandbox_account(&sandbox).await.unwrap(), "sb-new");
    }

    #[tokio::test]
    async fn listing_error_is_propagated() {
        let mut sandbox = MockSandboxAccounts::new();
        sandbox
            .expect_get_sandbox_accounts()
            .returning(|| Err(tonic::Status::unauthenticated("bad token").into()));
        sandbox.expect_open_sandbox_account().never();

        let err = ensure_sandbox_account(&sandbox).await.unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unauthenticated);
    }

    #[test]
    fn pay_in_from_decimal_splits_amount() {
        let request = SandboxPayInRequestShort::from_decimal("sb-1", "RUB", dec!(100000.25)).unwrap();
        assert_eq!(request.units, 100_000);
        assert_eq!(request.nano, 250_000_000);
        assert_eq!(request.currency, "RUB");
    }
}
