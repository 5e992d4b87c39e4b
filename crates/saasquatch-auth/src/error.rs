//! Error types for credential and widget operations

/// Errors that can occur while handling credentials or building widget URLs
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid tenant credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Signing produced an empty checksum
    #[error("checksum error")]
    EmptyChecksum,

    /// Widget host is not a valid URL
    #[error("Invalid widget URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type for credential and widget operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("SAASQUATCH_API_KEY".to_string());
        assert!(err.to_string().contains("SAASQUATCH_API_KEY"));
        assert_eq!(AuthError::EmptyChecksum.to_string(), "checksum error");
    }
}
