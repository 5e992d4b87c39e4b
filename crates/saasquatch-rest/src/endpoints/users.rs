//! User endpoints

use crate::error::RestResult;
use crate::transport::{segment, Transport};
use saasquatch_types::User;
use tracing::instrument;

/// User upsert and lookup
pub struct UserEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> UserEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Create a user, or update it if the id already exists in the account
    #[instrument(skip(self, user), fields(account_id = %user.account_id, user_id = %user.id))]
    pub async fn create_or_update(&self, user: &User) -> RestResult<User> {
        self.transport.post("user", user).await
    }

    /// Look up a user within an account
    #[instrument(skip(self))]
    pub async fn lookup(&self, account_id: &str, user_id: &str) -> RestResult<User> {
        let path = format!(
            "account/{}/user/{}",
            segment(account_id)?,
            segment(user_id)?
        );
        self.transport.get(&path).await
    }
}
