//! Tenant credentials and widget checksum signing
//!
//! The API key is stored using the `secrecy` crate, which zeroizes it on drop
//! and keeps it out of `Debug` output. It is only exposed to attach basic auth
//! and to key the widget HMAC.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the tenant alias
pub const TENANT_ALIAS_ENV: &str = "SAASQUATCH_TENANT_ALIAS";

/// Environment variable holding the tenant API key
pub const API_KEY_ENV: &str = "SAASQUATCH_API_KEY";

/// Fixed basic-auth username; the API key is the password
pub const BASIC_AUTH_USERNAME: &str = "ApiKey";

/// Tenant credentials for authenticated requests
pub struct Credentials {
    /// Tenant alias (public, appears in every URL)
    tenant_alias: String,
    /// API key (zeroized on drop)
    api_key: SecretString,
}

impl Credentials {
    /// Create credentials from a tenant alias and API key
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if either value is empty.
    pub fn new(tenant_alias: impl Into<String>, api_key: impl Into<String>) -> AuthResult<Self> {
        let tenant_alias = tenant_alias.into();
        let api_key = api_key.into();

        if tenant_alias.trim().is_empty() {
            return Err(AuthError::InvalidCredentials(
                "tenant alias is empty".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }

        Ok(Self {
            tenant_alias,
            api_key: SecretString::from(api_key),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `SAASQUATCH_TENANT_ALIAS` and `SAASQUATCH_API_KEY`.
    pub fn from_env() -> AuthResult<Self> {
        let tenant_alias = std::env::var(TENANT_ALIAS_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(TENANT_ALIAS_ENV.to_string()))?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;

        Self::new(tenant_alias, api_key)
    }

    /// Get the tenant alias
    pub fn tenant_alias(&self) -> &str {
        &self.tenant_alias
    }

    /// Username and password for HTTP basic auth
    pub fn basic_auth(&self) -> (&'static str, &str) {
        (BASIC_AUTH_USERNAME, self.api_key.expose_secret())
    }

    /// Signer for widget query strings
    pub fn widget_signer(&self) -> WidgetSigner<'_> {
        WidgetSigner { credentials: self }
    }

    fn key_bytes(&self) -> &[u8] {
        self.api_key.expose_secret().as_bytes()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            tenant_alias: self.tenant_alias.clone(),
            api_key: SecretString::from(self.api_key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("tenant_alias", &self.tenant_alias)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Computes widget checksums with a tenant's API key
#[derive(Debug, Clone, Copy)]
pub struct WidgetSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> WidgetSigner<'a> {
    /// Sign a set of query parameters
    ///
    /// Algorithm:
    /// 1. Order the parameters by key name, ascending
    /// 2. Concatenate the values (keys are not included)
    /// 3. HMAC-SHA256 keyed by the API key
    /// 4. Standard base64 with padding
    pub fn sign<'p, I>(&self, params: I) -> AuthResult<String>
    where
        I: IntoIterator<Item = (&'p str, &'p str)>,
    {
        let mut params: Vec<(&str, &str)> = params.into_iter().collect();
        params.sort_by(|a, b| a.0.cmp(b.0));

        let plain: String = params.iter().map(|(_, value)| *value).collect();

        let mut mac = HmacSha256::new_from_slice(self.credentials.key_bytes())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        mac.update(plain.as_bytes());

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("test_alias", "TEST_API_KEY").unwrap()
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let debug = format!("{:?}", creds());
        assert!(!debug.contains("TEST_API_KEY"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("test_alias"));
    }

    #[test]
    fn test_rejects_empty_values() {
        assert!(matches!(
            Credentials::new("", "key"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("alias", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_basic_auth_pair() {
        let creds = creds();
        assert_eq!(creds.basic_auth(), ("ApiKey", "TEST_API_KEY"));
    }

    #[test]
    fn test_clone_keeps_key() {
        let cloned = creds().clone();
        assert_eq!(cloned.basic_auth().1, "TEST_API_KEY");
        assert_eq!(cloned.tenant_alias(), "test_alias");
    }

    #[test]
    fn test_sign_known_vector() {
        let creds = creds();
        let signature = creds
            .widget_signer()
            .sign([
                ("userId", "u1"),
                ("tenantAlias", "test_alias"),
                ("accountId", "u1"),
                ("firstName", "A"),
                ("lastName", ""),
                ("email", "e@x.com"),
            ])
            .unwrap();

        // HMAC-SHA256("TEST_API_KEY", "u1" + "e@x.com" + "A" + "" + "test_alias" + "u1")
        assert_eq!(signature, "mMlYDvWusdq2ICmUbsqNVG2idAHAI9IUXpI5PORFCvs=");
    }

    #[test]
    fn test_sign_ignores_input_order() {
        let creds = creds();
        let signer = creds.widget_signer();
        let forward = signer.sign([("a", "1"), ("b", "2"), ("c", "3")]).unwrap();
        let reversed = signer.sign([("c", "3"), ("b", "2"), ("a", "1")]).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_sign_depends_on_key_order_not_value_order() {
        let creds = creds();
        let signer = creds.widget_signer();
        // Same values, different key assignment changes the concatenation
        let one = signer.sign([("a", "x"), ("b", "y")]).unwrap();
        let two = signer.sign([("a", "y"), ("b", "x")]).unwrap();
        assert_ne!(one, two);
    }

    #[test]
    fn test_signature_is_base64_sha256() {
        let creds = creds();
        let signature = creds.widget_signer().sign([("k", "v")]).unwrap();
        let raw = BASE64.decode(&signature).unwrap();
        assert_eq!(raw.len(), 32);
    }
}
