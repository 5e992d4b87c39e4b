//! Main REST client implementation

use crate::endpoints::{
    AccountEndpoints, ReferralCodeEndpoints, ReferralEndpoints, RewardBalanceEndpoints,
    UserEndpoints,
};
use crate::error::RestResult;
use crate::transport::{Transport, DEFAULT_HOST};
use reqwest::Client;
use saasquatch_auth::Credentials;
use saasquatch_types::{
    Account, BalanceDebited, DebitRewardRequest, ListReferralsOptions, ListReferralsResult,
    ListRewardBalancesOptions, ReferralCode, RewardBalance, User,
};
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("saasquatch-rest/", env!("CARGO_PKG_VERSION"));

/// SaaSquatch REST API client
///
/// One client is bound to one tenant. It holds no mutable state, so it can be
/// cloned and shared across tasks freely.
///
/// # Example
///
/// ```no_run
/// use saasquatch_rest::{Credentials, SquatchClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::new("my_tenant", "my_api_key")?;
///     let client = SquatchClient::new(creds)?;
///
///     let code = client.lookup_referral_code("BOBTESTERSON").await?;
///     println!("{} refers with {:?}", code.referrer_name, code.reward);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SquatchClient {
    transport: Transport,
}

impl SquatchClient {
    /// Create a client with default configuration
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client from `SAASQUATCH_TENANT_ALIAS` and `SAASQUATCH_API_KEY`
    pub fn from_env() -> RestResult<Self> {
        let credentials = Credentials::from_env()?;
        Self::new(credentials)
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let http_client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .build()?,
        };

        let transport = Transport::new(http_client, &config.host, credentials)?;

        info!(
            base_url = transport.base_url().as_str(),
            "Created SaaSquatch REST client"
        );

        Ok(Self { transport })
    }

    /// The transport core, for requests this client has no wrapper for
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Tenant alias this client is bound to
    pub fn tenant_alias(&self) -> &str {
        self.transport.credentials().tenant_alias()
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get account endpoints
    pub fn accounts(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.transport)
    }

    /// Get user endpoints
    pub fn users(&self) -> UserEndpoints<'_> {
        UserEndpoints::new(&self.transport)
    }

    /// Get referral endpoints
    pub fn referrals(&self) -> ReferralEndpoints<'_> {
        ReferralEndpoints::new(&self.transport)
    }

    /// Get referral code endpoints
    pub fn referral_codes(&self) -> ReferralCodeEndpoints<'_> {
        ReferralCodeEndpoints::new(&self.transport)
    }

    /// Get reward balance endpoints
    pub fn reward_balances(&self) -> RewardBalanceEndpoints<'_> {
        RewardBalanceEndpoints::new(&self.transport)
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// Create or update an account
    pub async fn create_or_update_account(&self, account: &Account) -> RestResult<Account> {
        self.accounts().create_or_update(account).await
    }

    /// Look up an account
    pub async fn lookup_account(&self, account_id: &str) -> RestResult<Account> {
        self.accounts().lookup(account_id).await
    }

    /// Create or update a user
    pub async fn create_or_update_user(&self, user: &User) -> RestResult<User> {
        self.users().create_or_update(user).await
    }

    /// Look up a user within an account
    pub async fn lookup_user(&self, account_id: &str, user_id: &str) -> RestResult<User> {
        self.users().lookup(account_id, user_id).await
    }

    /// List referrals
    pub async fn list_referrals(
        &self,
        options: &ListReferralsOptions,
    ) -> RestResult<ListReferralsResult> {
        self.referrals().list(options).await
    }

    /// Look up a referral code
    pub async fn lookup_referral_code(&self, code: &str) -> RestResult<ReferralCode> {
        self.referral_codes().lookup(code).await
    }

    /// List reward balances
    pub async fn list_reward_balances(
        &self,
        options: &ListRewardBalancesOptions,
    ) -> RestResult<Vec<RewardBalance>> {
        self.reward_balances().list(options).await
    }

    /// Redeem credit from a reward balance
    pub async fn debit_reward_balance(
        &self,
        request: &DebitRewardRequest,
    ) -> RestResult<BalanceDebited> {
        self.reward_balances().debit(request).await
    }
}

impl std::fmt::Debug for SquatchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SquatchClient")
            .field("base_url", &self.transport.base_url().as_str())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, without the `/api/v1/<tenant>/` suffix
    pub host: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Pre-built HTTP client; when set, `timeout_secs` and `user_agent` are ignored
    pub http_client: Option<Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a caller-configured HTTP client
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}
