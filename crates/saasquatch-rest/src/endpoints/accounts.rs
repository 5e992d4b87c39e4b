//! Account endpoints

use crate::error::RestResult;
use crate::transport::{segment, Transport};
use saasquatch_types::Account;
use tracing::instrument;

/// Account sync and lookup
pub struct AccountEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Create an account, or update it if the id already exists
    #[instrument(skip(self, account), fields(account_id = %account.id))]
    pub async fn create_or_update(&self, account: &Account) -> RestResult<Account> {
        self.transport.post("accountsync", account).await
    }

    /// Look up an account by id
    #[instrument(skip(self))]
    pub async fn lookup(&self, account_id: &str) -> RestResult<Account> {
        self.transport
            .get(&format!("account/{}", segment(account_id)?))
            .await
    }
}
