//! Per-domain service clients.
//!
//! Each client wraps one remote service, shapes simple arguments into wire
//! requests and dispatches them through the owning client's
//! [`CallContext`]. All of them share one channel; creating a client is
//! cheap.

mod instruments;
pub mod market_data;
mod operations;
mod orders;
mod sandbox;
mod stop_orders;
mod users;

pub use instruments::{InstrumentsService, find_uid_by_ticker};
pub use market_data::{MarketDataService, MarketDataStreamService, last_price};
pub use operations::{OperationsService, OperationsStreamService, security_balance};
pub use orders::{OrdersService, OrdersStreamService, PostOrderRequestShort, close_position};
pub use sandbox::{SandboxPayInRequestShort, SandboxService, ensure_sandbox_account};
pub use stop_orders::{PostStopOrderRequestShort, StopOrdersService};
pub use users::{UsersService, first_open_account};

use crate::client::CallContext;

/// `accounts`, or the configured account when the list is empty.
fn accounts_or_default(ctx: &CallContext, accounts: Vec<String>) -> Vec<String> {
    if !accounts.is_empty() {
        return accounts;
    }
    let account_id = ctx.account_id("");
    if account_id.is_empty() {
        Vec::new()
    } else {
        vec![account_id]
    }
}
