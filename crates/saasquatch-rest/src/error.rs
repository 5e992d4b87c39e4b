//! Error types for REST API operations

use saasquatch_auth::AuthError;
use saasquatch_types::{ApiErrorCode, ErrorResponse};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credential problem
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Host or request path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Query options could not be encoded
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Request or response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing a raw response body failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The API rejected the request as malformed (`BAD_REQUEST`)
    #[error("saasquatch: bad request")]
    BadRequest,

    /// The referral code does not exist (`REFERRAL_CODE_NOT_FOUND`)
    #[error("referral: no such code")]
    NoSuchCode,

    /// Redemption of zero or more than the redeemable credit (`INVALD_REWARD_REDEMPTION`)
    #[error("reward: invalid redemption due to zero amount or exceed redeemable credit")]
    InvalidRedemption,

    /// Any other non-2xx response
    #[error("{method} {url}: {status} {message} {code}")]
    Api {
        /// Request method
        method: reqwest::Method,
        /// Request URL
        url: String,
        /// HTTP status of the response
        status: u16,
        /// Message from the error payload, empty if there was none
        message: String,
        /// `apiErrorCode` from the error payload, empty if there was none
        code: String,
    },
}

impl RestError {
    /// Classify an error payload from a non-2xx response
    ///
    /// Known codes map to their dedicated variant whatever the message says.
    pub fn from_error_response(
        method: reqwest::Method,
        url: impl Into<String>,
        status: u16,
        payload: ErrorResponse,
    ) -> Self {
        match payload.code() {
            ApiErrorCode::BadRequest => Self::BadRequest,
            ApiErrorCode::ReferralCodeNotFound => Self::NoSuchCode,
            ApiErrorCode::InvalidRewardRedemption => Self::InvalidRedemption,
            ApiErrorCode::Other(_) => Self::Api {
                method,
                url: url.into(),
                status,
                message: payload.message,
                code: payload.api_error_code,
            },
        }
    }

    /// HTTP status associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// API error code carried by this error, if any
    pub fn api_error_code(&self) -> Option<ApiErrorCode> {
        match self {
            Self::BadRequest => Some(ApiErrorCode::BadRequest),
            Self::NoSuchCode => Some(ApiErrorCode::ReferralCodeNotFound),
            Self::InvalidRedemption => Some(ApiErrorCode::InvalidRewardRedemption),
            Self::Api { code, .. } if !code.is_empty() => Some(ApiErrorCode::parse(code)),
            _ => None,
        }
    }

    /// Check if the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoSuchCode) || self.status() == Some(404)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn payload(code: &str, message: &str) -> ErrorResponse {
        ErrorResponse {
            status_code: 400,
            message: message.to_string(),
            api_error_code: code.to_string(),
        }
    }

    #[test]
    fn test_known_codes_map_to_variants() {
        let url = "https://app.referralsaasquatch.com/api/v1/t/code/X";
        for message in ["", "anything at all"] {
            assert!(matches!(
                RestError::from_error_response(Method::GET, url, 400, payload("BAD_REQUEST", message)),
                RestError::BadRequest
            ));
            assert!(matches!(
                RestError::from_error_response(Method::GET, url, 404, payload("REFERRAL_CODE_NOT_FOUND", message)),
                RestError::NoSuchCode
            ));
            assert!(matches!(
                RestError::from_error_response(Method::POST, url, 400, payload("INVALD_REWARD_REDEMPTION", message)),
                RestError::InvalidRedemption
            ));
        }
    }

    #[test]
    fn test_unknown_code_is_structured() {
        let err = RestError::from_error_response(
            Method::GET,
            "https://host/api/v1/t/account/a1",
            404,
            payload("ACCOUNT_NOT_FOUND", "No account a1"),
        );

        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(
            err.api_error_code(),
            Some(ApiErrorCode::Other("ACCOUNT_NOT_FOUND".to_string()))
        );
        assert_eq!(
            err.to_string(),
            "GET https://host/api/v1/t/account/a1: 404 No account a1 ACCOUNT_NOT_FOUND"
        );
    }

    #[test]
    fn test_sentinel_accessors() {
        assert!(RestError::NoSuchCode.is_not_found());
        assert_eq!(RestError::BadRequest.status(), None);
        assert_eq!(
            RestError::InvalidRedemption.api_error_code(),
            Some(ApiErrorCode::InvalidRewardRedemption)
        );
        assert_eq!(RestError::InvalidParameter("x".into()).api_error_code(), None);
    }
}
