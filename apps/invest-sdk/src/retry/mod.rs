//! Retry policy for API calls.
//!
//! Failed calls are classified by gRPC code and retried per class:
//!
//! | Class | Codes | Backoff |
//! |-------|-------|---------|
//! | Transient | `UNAVAILABLE`, `INTERNAL` | 500ms × attempt |
//! | Rate limited | `RESOURCE_EXHAUSTED` | server's `x-ratelimit-reset` hint |
//! | Other | everything else | not retried |
//!
//! Unary calls use `[transient, rate-limited]` (the second rule is dropped by
//! `DisableResourceExhaustedRetry`); opening a server stream uses
//! `[transient]`. `DisableAllRetry` empties both.
//!
//! # Example
//!
//! ```rust,ignore
//! use invest_sdk::retry::RetryPolicy;
//!
//! let policy = RetryPolicy::from_config(&config);
//! let response = policy
//!     .run("GetAccounts", || {
//!         let mut users = users.clone();
//!         async move { users.get_accounts(GetAccountsRequest::default()).await }
//!     })
//!     .await?;
//! ```

mod executor;
mod policy;

pub use policy::{
    Backoff, FailureClass, RATE_LIMIT_RESET_HEADER, RetryPolicy, RetryRule,
    TRANSIENT_BACKOFF_BASE, rate_limit_reset,
};
