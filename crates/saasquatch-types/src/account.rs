//! Account sync records

use serde::{Deserialize, Serialize};

/// A billing account, the unit that referral rewards are attached to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier chosen by the tenant
    #[serde(default)]
    pub id: String,
    /// ISO currency code used for credit rewards
    #[serde(default)]
    pub currency: String,
    /// Subscription state, if the account has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    /// Referral code this account signed up with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral: Option<Referral>,
}

impl Account {
    /// Create an account payload with the given id and currency
    pub fn new(id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
            ..Default::default()
        }
    }

    /// Attach a subscription
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = Some(subscription);
        self
    }

    /// Record the referral code the account was referred by
    pub fn with_referral_code(mut self, code: impl Into<String>) -> Self {
        self.referral = Some(Referral { code: code.into() });
        self
    }
}

/// Subscription attached to an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription status (e.g. "ACTIVE", "TRIAL", "CANCELLED")
    #[serde(default)]
    pub status: String,
    /// Billing interval unit (e.g. "MONTHLY")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_interval_type: Option<String>,
    /// Number of interval units per billing cycle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_interval_value: Option<i64>,
    /// Subscription value per cycle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Referral reference on an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    /// Referral code used at signup
    #[serde(default)]
    pub code: String,
}
