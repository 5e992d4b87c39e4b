//! REST API client for the SaaSquatch referral marketing service
//!
//! This crate wraps the tenant-scoped REST API with typed requests and
//! responses: account sync, users, referrals, referral codes, and reward
//! balances.
//!
//! # Features
//!
//! - **Accounts**: create/update via account sync, lookup by id
//! - **Users**: create/update, lookup within an account
//! - **Referrals**: filtered, paginated listing
//! - **Referral codes**: lookup with the attached reward
//! - **Reward balances**: listing and credit redemption
//!
//! # Authentication
//!
//! Every request uses HTTP basic auth with the username `ApiKey` and the
//! tenant's API key as password. Requests are resolved against
//! `https://app.referralsaasquatch.com/api/v1/<tenantAlias>/`.
//!
//! # Errors
//!
//! Non-2xx responses are classified by their `apiErrorCode`: a few codes map
//! to dedicated variants ([`RestError::BadRequest`], [`RestError::NoSuchCode`],
//! [`RestError::InvalidRedemption`]); all others become [`RestError::Api`]
//! with the status, message and code. The client never retries.
//!
//! # Example
//!
//! ```no_run
//! use saasquatch_rest::{SquatchClient, ListRewardBalancesOptions, RestError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SquatchClient::from_env()?;
//!
//!     match client.lookup_referral_code("FRIEND10").await {
//!         Ok(code) => println!("Code from {}", code.referrer_name),
//!         Err(RestError::NoSuchCode) => println!("Unknown code"),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     let balances = client
//!         .list_reward_balances(&ListRewardBalancesOptions::for_account("acct-1"))
//!         .await?;
//!     println!("Balances: {:?}", balances);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

// Re-export main types
pub use client::{ClientConfig, SquatchClient};
pub use error::{RestError, RestResult};
pub use saasquatch_auth::Credentials;
pub use transport::Transport;

// Re-export request and response types
pub use saasquatch_types::{
    // Accounts
    Account, Referral, Subscription,
    // Users
    User,
    // Referrals
    FraudSignal, FraudSignals, ListReferralsOptions, ListReferralsResult, ReferralCode,
    ReferralObject, ReferredReward, ReferredUser, Reward,
    // Reward balances
    BalanceDebited, DebitRewardRequest, ListRewardBalancesOptions, RewardBalance,
    // Errors
    ApiErrorCode, ErrorResponse,
};
