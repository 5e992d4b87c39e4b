//! Referral code lookup

use crate::error::RestResult;
use crate::transport::{segment, Transport};
use saasquatch_types::ReferralCode;
use tracing::instrument;

/// Referral code queries
pub struct ReferralCodeEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> ReferralCodeEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Look up a referral code and the reward it grants
    ///
    /// # Errors
    /// `RestError::NoSuchCode` if the code does not exist.
    #[instrument(skip(self))]
    pub async fn lookup(&self, code: &str) -> RestResult<ReferralCode> {
        self.transport.get(&format!("code/{}", segment(code)?)).await
    }
}
