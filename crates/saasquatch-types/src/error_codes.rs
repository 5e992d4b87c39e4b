//! API error payloads and the error codes this client recognises
//!
//! Non-2xx responses carry a JSON body of the form
//! `{"statusCode": 404, "message": "...", "apiErrorCode": "..."}`. A handful of
//! codes have a dedicated meaning for callers; everything else is passed through
//! verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error payload returned by the API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status as reported in the body
    #[serde(default)]
    pub status_code: u16,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Machine-readable error code
    #[serde(default)]
    pub api_error_code: String,
}

impl ErrorResponse {
    /// Parsed form of `api_error_code`
    pub fn code(&self) -> ApiErrorCode {
        ApiErrorCode::parse(&self.api_error_code)
    }
}

/// API error codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    /// BAD_REQUEST
    BadRequest,
    /// REFERRAL_CODE_NOT_FOUND
    ReferralCodeNotFound,
    /// INVALD_REWARD_REDEMPTION: zero amount or more than the redeemable credit.
    /// The misspelling is the service's own.
    InvalidRewardRedemption,
    /// Any other code, kept verbatim
    Other(String),
}

impl ApiErrorCode {
    /// Parse a wire error code. Matching is exact and case-sensitive.
    pub fn parse(code: &str) -> Self {
        match code {
            "BAD_REQUEST" => Self::BadRequest,
            "REFERRAL_CODE_NOT_FOUND" => Self::ReferralCodeNotFound,
            "INVALD_REWARD_REDEMPTION" => Self::InvalidRewardRedemption,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the code as sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ReferralCodeNotFound => "REFERRAL_CODE_NOT_FOUND",
            Self::InvalidRewardRedemption => "INVALD_REWARD_REDEMPTION",
            Self::Other(code) => code,
        }
    }

    /// Returns true for codes with a dedicated error variant
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ApiErrorCode {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}
