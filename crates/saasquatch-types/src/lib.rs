//! Shared types for the SaaSquatch referral API
//!
//! This crate holds the JSON records exchanged with the remote service and the
//! vocabulary of API error codes. It performs no I/O and can be used on its own,
//! for example to decode webhook payloads.
//!
//! # Key Types
//!
//! - [`Account`], [`Subscription`] - Account sync payloads
//! - [`User`] - User records scoped to an account
//! - [`ReferralCode`], [`Reward`] - Referral code lookups
//! - [`ReferralObject`], [`ListReferralsOptions`] - Referral listings
//! - [`RewardBalance`], [`DebitRewardRequest`] - Reward balances and redemption
//! - [`ApiErrorCode`], [`ErrorResponse`] - Error payloads returned by the API

pub mod account;
pub mod error_codes;
pub mod referral;
pub mod reward;
pub mod user;

// Re-export commonly used types
pub use account::*;
pub use error_codes::*;
pub use referral::*;
pub use reward::*;
pub use user::*;
