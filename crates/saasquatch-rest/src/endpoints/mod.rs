//! API endpoint implementations

pub mod accounts;
pub mod referral_codes;
pub mod referrals;
pub mod reward_balances;
pub mod users;

pub use accounts::AccountEndpoints;
pub use referral_codes::ReferralCodeEndpoints;
pub use referrals::ReferralEndpoints;
pub use reward_balances::RewardBalanceEndpoints;
pub use users::UserEndpoints;
