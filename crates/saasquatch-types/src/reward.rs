//! Rewards, reward balances and credit redemption

use serde::{Deserialize, Serialize};

/// Reward attached to a referral code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    /// Reward type (e.g. "CREDIT", "PCT_DISCOUNT", "FEATURE")
    #[serde(default, rename = "type")]
    pub reward_type: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub credit: i64,
    #[serde(default)]
    pub discount_percent: i64,
    #[serde(default)]
    pub months_discount_is_valid: i64,

    // Only present for FEATURE rewards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Filters for listing reward balances
///
/// `account_id` is always sent; the other filters only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRewardBalancesOptions {
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_type_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_type_filter: Option<String>,
}

impl ListRewardBalancesOptions {
    /// Balances for an account
    pub fn for_account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Default::default()
        }
    }

    /// Narrow to a single user of the account
    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Only balances of the given reward type
    pub fn reward_type(mut self, reward_type: impl Into<String>) -> Self {
        self.reward_type_filter = Some(reward_type.into());
        self
    }

    /// Only FEATURE balances of the given feature type
    pub fn feature_type(mut self, feature_type: impl Into<String>) -> Self {
        self.feature_type_filter = Some(feature_type.into());
        self
    }
}

/// Accumulated reward balance of one type and unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardBalance {
    #[serde(default, rename = "type")]
    pub reward_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_assigned_credit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_redeemed_credit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount_percent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_discount_percent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_discount_percent: Option<i64>,
}

impl RewardBalance {
    /// Credit still available for redemption, if this is a credit balance
    pub fn available_credit(&self) -> Option<i64> {
        let assigned = self.total_assigned_credit?;
        Some(assigned.saturating_sub(self.total_redeemed_credit.unwrap_or(0)))
    }
}

/// Request body for redeeming credit from an account's balance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitRewardRequest {
    pub account_id: String,
    /// Credit unit to redeem from (e.g. "cents")
    pub unit: String,
    /// Amount to redeem, in `unit`
    pub amount: i64,
}

impl DebitRewardRequest {
    /// Redeem `amount` of `unit` from `account_id`
    pub fn new(account_id: impl Into<String>, unit: impl Into<String>, amount: i64) -> Self {
        Self {
            account_id: account_id.into(),
            unit: unit.into(),
            amount,
        }
    }
}

/// Outcome of a credit redemption
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDebited {
    #[serde(default)]
    pub credit_redeemed: i64,
    #[serde(default)]
    pub credit_available: i64,
    #[serde(default)]
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_feature_fields_omitted_when_unset() {
        let reward = Reward {
            reward_type: "CREDIT".to_string(),
            unit: "cents".to_string(),
            credit: 1000,
            ..Default::default()
        };
        let json = serde_json::to_value(&reward).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "CREDIT",
                "unit": "cents",
                "credit": 1000,
                "discountPercent": 0,
                "monthsDiscountIsValid": 0
            })
        );
    }

    #[test]
    fn test_balance_list_decodes() {
        let json = r#"[
            {"type": "CREDIT", "unit": "cents", "count": 3, "totalAssignedCredit": 3000, "totalRedeemedCredit": 1200},
            {"type": "PCT_DISCOUNT", "totalDiscountPercent": 20, "referredDiscountPercent": 10, "referrerDiscountPercent": 10}
        ]"#;
        let balances: Vec<RewardBalance> = serde_json::from_str(json).unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].available_credit(), Some(1800));
        assert_eq!(balances[1].available_credit(), None);
        assert_eq!(balances[1].total_discount_percent, Some(20));
    }

    #[test]
    fn test_balance_round_trip() {
        let balance = RewardBalance {
            reward_type: "FEATURE".to_string(),
            feature_type: Some("SEATS".to_string()),
            count: Some(2),
            ..Default::default()
        };
        let bytes = serde_json::to_vec(&balance).unwrap();
        let decoded: RewardBalance = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, balance);
    }

    #[test]
    fn test_debit_request_shape() {
        let request = DebitRewardRequest::new("a1", "cents", 500);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"accountId": "a1", "unit": "cents", "amount": 500})
        );

        let bytes = serde_json::to_vec(&request).unwrap();
        let decoded: DebitRewardRequest = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_available_credit_saturates() {
        let balance = RewardBalance {
            total_assigned_credit: Some(i64::MIN),
            total_redeemed_credit: Some(1),
            ..Default::default()
        };
        assert_eq!(balance.available_credit(), Some(i64::MIN));

        let balance = RewardBalance {
            total_assigned_credit: Some(1800),
            total_redeemed_credit: Some(500),
            ..Default::default()
        };
        assert_eq!(balance.available_credit(), Some(1300));
    }

    #[test]
    fn test_balance_debited_round_trip() {
        let debited = BalanceDebited {
            credit_redeemed: 500,
            credit_available: 1300,
            unit: "cents".to_string(),
        };
        let bytes = serde_json::to_vec(&debited).unwrap();
        let decoded: BalanceDebited = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, debited);
    }

    #[test]
    fn test_balance_options_builder() {
        let opts = ListRewardBalancesOptions::for_account("a1")
            .user("u1")
            .reward_type("FEATURE")
            .feature_type("SEATS");
        assert_eq!(opts.account_id, "a1");
        assert_eq!(opts.user_id.as_deref(), Some("u1"));
        assert_eq!(opts.feature_type_filter.as_deref(), Some("SEATS"));
    }
}
