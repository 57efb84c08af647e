//! Accounts, margin and tariff.

use async_trait::async_trait;

use crate::client::CallContext;
use crate::error::Result;
use crate::ports::AccountReader;
use crate::proto::{
    AccountStatus, GetAccountsRequest, GetAccountsResponse, GetInfoRequest, GetInfoResponse,
    GetMarginAttributesRequest, GetMarginAttributesResponse, GetUserTariffRequest,
    GetUserTariffResponse, users_service_client::UsersServiceClient,
};
use crate::transport::AuthChannel;

/// Client for `UsersService`.
#[derive(Debug, Clone)]
pub struct UsersService {
    ctx: CallContext,
}

impl UsersService {
    pub(crate) const fn new(ctx: CallContext) -> Self {
        Self { ctx }
    }

    /// The shared call context.
    #[must_use]
    pub const fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn stub(&self) -> UsersServiceClient<AuthChannel> {
        UsersServiceClient::new(self.ctx.channel())
    }

    /// All accounts visible to the token.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_accounts(&self) -> Result<GetAccountsResponse> {
        self.ctx
            .unary("GetAccounts", || {
                let mut stub = self.stub();
                async move { stub.get_accounts(GetAccountsRequest {}).await }
            })
            .await
    }

    /// Margin indicators of a margin account.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_margin_attributes(
        &self,
        account_id: &str,
    ) -> Result<GetMarginAttributesResponse> {
        let request = GetMarginAttributesRequest {
            account_id: self.ctx.account_id(account_id),
        };

        self.ctx
            .unary("GetMarginAttributes", || {
                let mut stub = self.stub();
                let request = request.clone();
                async move { stub.get_margin_attributes(request).await }
            })
            .await
    }

    /// Request limits of the user's tariff.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_user_tariff(&self) -> Result<GetUserTariffResponse> {
        self.ctx
            .unary("GetUserTariff", || {
                let mut stub = self.stub();
                async move { stub.get_user_tariff(GetUserTariffRequest {}).await }
            })
            .await
    }

    /// Qualification and tariff of the user.
    ///
    /// # Errors
    ///
    /// Returns the call's error after retries.
    pub async fn get_info(&self) -> Result<GetInfoResponse> {
        self.ctx
            .unary("GetInfo", || {
                let mut stub = self.stub();
                async move { stub.get_info(GetInfoRequest {}).await }
            })
            .await
    }
}

#[async_trait]
impl AccountReader for UsersService {
    async fn get_accounts(&self) -> Result<GetAccountsResponse> {
        Self::get_accounts(self).await
    }
}

/// Id of the first open account, if any.
///
/// # Errors
///
/// Returns the listing call's error.
pub async fn first_open_account<A>(reader: &A) -> Result<Option<String>>
where
    A: AccountReader + ?Sized,
{
    let accounts = reader.get_accounts().await?.accounts;
    Ok(accounts
        .into_iter()
        .find(|account| account.status() == AccountStatus::Open)
        .map(|account| account.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockAccountReader;
    use crate::proto::Account;

    fn account(id: &str, status: AccountStatus) -> Account {
        Account {
            id: id.to_string(),
            status: status.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn skips_new_and_closed_accounts() {
        let mut reader = MockAccountReader::new();
        reader.expect_get_accounts().times(1).returning(|| {
            Ok(GetAccountsResponse {
                accounts: vec![
                    account("acc-closed", AccountStatus::Closed),
                    account("acc-new", AccountStatus::New),
                    account("acc-open", AccountStatus::Open),
                ],
            })
        });

        let id = first_open_account(&reader).await.unwrap();
        assert_eq!(id.as_deref(), Some("acc-open"));
    }

    #[tokio::test]
    async fn no_open_account_is_none() {
        let mut reader = MockAccountReader::new();
        reader
            .expect_get_accounts()
            .returning(|| Ok(GetAccountsResponse::default()));

        assert!(first_open_account(&reader).await.unwrap().is_none());
    }
}
