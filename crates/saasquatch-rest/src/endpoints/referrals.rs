//! Referral listing

use crate::error::RestResult;
use crate::transport::{with_query, Transport};
use saasquatch_types::{ListReferralsOptions, ListReferralsResult};
use tracing::{debug, instrument};

/// Referral queries
pub struct ReferralEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> ReferralEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List referrals matching `options`
    ///
    /// Use `limit` and `offset` to page; `total_count` in the result is the
    /// number of matches across all pages.
    #[instrument(skip(self))]
    pub async fn list(&self, options: &ListReferralsOptions) -> RestResult<ListReferralsResult> {
        let path = with_query("referrals", options)?;
        let result: ListReferralsResult = self.transport.get(&path).await?;

        debug!(
            count = result.count,
            total = result.total_count,
            "Listed referrals"
        );

        Ok(result)
    }
}
