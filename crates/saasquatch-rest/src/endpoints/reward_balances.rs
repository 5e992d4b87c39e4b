//! Reward balance queries and credit redemption

use crate::error::RestResult;
use crate::transport::{with_query, Transport};
use saasquatch_types::{BalanceDebited, DebitRewardRequest, ListRewardBalancesOptions, RewardBalance};
use tracing::{debug, instrument};

/// Reward balance endpoints
pub struct RewardBalanceEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> RewardBalanceEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List reward balances for an account, optionally narrowed by user and type
    #[instrument(skip(self))]
    pub async fn list(&self, options: &ListRewardBalancesOptions) -> RestResult<Vec<RewardBalance>> {
        let path = with_query("reward/balance", options)?;
        self.transport.get(&path).await
    }

    /// Redeem credit from an account's balance
    ///
    /// # Errors
    /// `RestError::InvalidRedemption` if the amount is zero or exceeds the
    /// redeemable credit.
    #[instrument(skip(self))]
    pub async fn debit(&self, request: &DebitRewardRequest) -> RestResult<BalanceDebited> {
        let debited: BalanceDebited = self.transport.post("credit/bulkredeem", request).await?;

        debug!(
            redeemed = debited.credit_redeemed,
            available = debited.credit_available,
            unit = %debited.unit,
            "Redeemed credit"
        );

        Ok(debited)
    }
}
