//! Referral codes and referral listings

use serde::{Deserialize, Serialize};

use crate::reward::Reward;

/// Result of looking up a referral code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCode {
    /// The code itself
    #[serde(default)]
    pub code: String,
    /// Creation time (epoch milliseconds)
    #[serde(default)]
    pub date_created: i64,
    /// Display name of the user who owns the code
    #[serde(default)]
    pub referrer_name: String,
    /// Reward granted to whoever redeems the code
    #[serde(default)]
    pub reward: Reward,
}

/// Filters and pagination for listing referrals
///
/// Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReferralsOptions {
    /// Only referrals made by this account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referring_account_id: Option<String>,
    /// Only referrals made by this user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referring_user_id: Option<String>,
    /// Paid-date filter, in the service's range syntax (e.g. "0,1420070400000")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_referral_paid: Option<String>,
    /// Ended-date filter, same syntax as `date_referral_paid`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_referral_ended: Option<String>,
    /// Moderation status of the referred side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_moderation_status: Option<String>,
    /// Moderation status of the referrer side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_moderation_status: Option<String>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ListReferralsOptions {
    /// Filter by referring account
    pub fn referring_account(mut self, account_id: impl Into<String>) -> Self {
        self.referring_account_id = Some(account_id.into());
        self
    }

    /// Filter by referring user
    pub fn referring_user(mut self, user_id: impl Into<String>) -> Self {
        self.referring_user_id = Some(user_id.into());
        self
    }

    /// Set page size and offset
    pub fn page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// One page of referrals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReferralsResult {
    /// Number of referrals in this page
    #[serde(default)]
    pub count: i64,
    /// Number of referrals matching the filters
    #[serde(default)]
    pub total_count: i64,
    /// The referrals
    #[serde(default)]
    pub referrals: Vec<ReferralObject>,
}

/// A referral between a referrer and a referred user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralObject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub referred_user: ReferredUser,
    #[serde(default)]
    pub referrer_user: ReferredUser,
    #[serde(default)]
    pub referred_reward: ReferredReward,
    #[serde(default)]
    pub referrer_reward: ReferredReward,
    #[serde(default)]
    pub moderation_status: String,
    #[serde(default)]
    pub referred_moderation_status: String,
    #[serde(default)]
    pub referrer_moderation_status: String,
    #[serde(default)]
    pub fraud_signals: FraudSignals,
    /// Epoch milliseconds, zero when unset
    #[serde(default)]
    pub date_referral_started: i64,
    #[serde(default)]
    pub date_referral_paid: i64,
    #[serde(default)]
    pub date_referral_ended: i64,
    #[serde(default)]
    pub date_moderated: i64,
}

/// Either side of a referral
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferredUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub referral_code: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, rename = "firstSeenIP")]
    pub first_seen_ip: String,
    #[serde(default, rename = "lastSeenIP")]
    pub last_seen_ip: String,
    #[serde(default)]
    pub date_created: i64,
    #[serde(default)]
    pub email_hash: String,
    #[serde(default)]
    pub referral_source: String,
    #[serde(default)]
    pub locale: String,
}

/// Reward given to one side of a referral
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferredReward {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub reward_type: String,
    #[serde(default)]
    pub date_given: i64,
    #[serde(default)]
    pub date_expires: i64,
    #[serde(default)]
    pub date_cancelled: i64,
    #[serde(default)]
    pub cancellable: bool,
    #[serde(default)]
    pub reward_source: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub discount_percent: i64,
    #[serde(default)]
    pub feature_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub assigned_credit: i64,
    #[serde(default)]
    pub redeemed_credit: i64,
    #[serde(default)]
    pub currency: String,
}

/// Fraud heuristics computed by the service for a referral
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudSignals {
    #[serde(default)]
    pub name: FraudSignal,
    #[serde(default)]
    pub ip: FraudSignal,
    #[serde(default)]
    pub email: FraudSignal,
    #[serde(default)]
    pub rate: FraudSignal,
}

impl FraudSignals {
    /// Sum of all signal scores
    pub fn total_score(&self) -> i64 {
        self.name
            .score
            .saturating_add(self.ip.score)
            .saturating_add(self.email.score)
            .saturating_add(self.rate.score)
    }
}

/// A single fraud heuristic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudSignal {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERRALS_PAGE: &str = r#"{
        "count": 1,
        "totalCount": 12,
        "referrals": [{
            "id": "r-1",
            "referredUser": {
                "id": "u2",
                "accountId": "a2",
                "email": "friend@example.com",
                "firstSeenIP": "10.0.0.1",
                "dateCreated": 1420070400000
            },
            "referrerUser": {"id": "u1", "accountId": "a1"},
            "referredReward": {"id": "rw-1", "type": "PCT_DISCOUNT", "discountPercent": 10, "cancellable": true},
            "moderationStatus": "APPROVED",
            "fraudSignals": {
                "ip": {"message": "Same IP as referrer", "score": 40},
                "email": {"message": "", "score": 5}
            },
            "dateReferralStarted": 1420070400000
        }]
    }"#;

    #[test]
    fn test_decode_referral_page() {
        let page: ListReferralsResult = serde_json::from_str(REFERRALS_PAGE).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.total_count, 12);

        let referral = &page.referrals[0];
        assert_eq!(referral.referred_user.first_seen_ip, "10.0.0.1");
        assert_eq!(referral.referred_reward.reward_type, "PCT_DISCOUNT");
        assert!(referral.referred_reward.cancellable);
        assert_eq!(referral.referrer_reward, ReferredReward::default());
        assert_eq!(referral.fraud_signals.total_score(), 45);
        assert_eq!(referral.date_referral_paid, 0);
    }

    #[test]
    fn test_referral_page_round_trip() {
        let page: ListReferralsResult = serde_json::from_str(REFERRALS_PAGE).unwrap();
        let bytes = serde_json::to_vec(&page).unwrap();
        let decoded: ListReferralsResult = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, page);
    }

    #[test]
    fn test_referral_code_round_trip() {
        let code = ReferralCode {
            code: "BOBTESTERSON".to_string(),
            date_created: 1420070400000,
            referrer_name: "Bob Testerson".to_string(),
            reward: Reward {
                reward_type: "PCT_DISCOUNT".to_string(),
                unit: "%".to_string(),
                discount_percent: 10,
                months_discount_is_valid: 6,
                ..Default::default()
            },
        };

        let bytes = serde_json::to_vec(&code).unwrap();
        let decoded: ReferralCode = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, code);
    }

    #[test]
    fn test_fraud_score_saturates() {
        let mut signals = FraudSignals::default();
        signals.name.score = 3;
        signals.ip.score = 4;
        assert_eq!(signals.total_score(), 7);

        signals.email.score = i64::MAX;
        signals.rate.score = 10;
        assert_eq!(signals.total_score(), i64::MAX);
    }

    #[test]
    fn test_options_builders() {
        let opts = ListReferralsOptions::default()
            .referring_account("a1")
            .page(25, 50);
        assert_eq!(opts.referring_account_id.as_deref(), Some("a1"));
        assert_eq!(opts.limit, Some(25));
        assert_eq!(opts.offset, Some(50));
        assert!(opts.referring_user_id.is_none());
    }
}
