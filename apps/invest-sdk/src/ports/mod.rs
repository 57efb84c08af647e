//! Capability traits over the service clients.
//!
//! Application code that only needs one capability (placing orders, reading
//! positions) can depend on the trait and be tested against a mock.

use async_trait::async_trait;

use crate::error::Result;
use crate::proto::{
    FindInstrumentResponse, GetAccountsResponse, GetLastPricesResponse,
    OpenSandboxAccountResponse, PositionsResponse, PostOrderResponse, SandboxPayInResponse,
};
use crate::services::{PostOrderRequestShort, SandboxPayInRequestShort};

/// Places market and limit orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderPlacer: Send + Sync {
    /// Buy order.
    async fn buy(&self, order: PostOrderRequestShort) -> Result<PostOrderResponse>;

    /// Sell order.
    async fn sell(&self, order: PostOrderRequestShort) -> Result<PostOrderResponse>;
}

/// Reads an account's positions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PositionReader: Send + Sync {
    /// Positions of `account_id` (empty means the configured account).
    async fn get_positions(&self, account_id: &str) -> Result<PositionsResponse>;
}

/// Searches instruments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstrumentFinder: Send + Sync {
    /// Instruments matching a ticker, name, ISIN or FIGI fragment.
    async fn find_instrument(&self, query: &str) -> Result<FindInstrumentResponse>;
}

/// Sandbox account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SandboxAccounts: Send + Sync {
    /// Existing sandbox accounts.
    async fn get_sandbox_accounts(&self) -> Result<GetAccountsResponse>;

    /// Open a new sandbox account.
    async fn open_sandbox_account(&self) -> Result<OpenSandboxAccountResponse>;

    /// Credit a sandbox account.
    async fn sandbox_pay_in(&self, request: SandboxPayInRequestShort)
    -> Result<SandboxPayInResponse>;
}

/// Lists the user's accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountReader: Send + Sync {
    /// All accounts visible to the token.
    async fn get_accounts(&self) -> Result<GetAccountsResponse>;
}

/// Reads last trade prices.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LastPriceReader: Send + Sync {
    /// Last prices by instrument uid or FIGI.
    async fn get_last_prices(&self, instrument_ids: Vec<String>) -> Result<GetLastPricesResponse>;
}
