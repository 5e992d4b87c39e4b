//! Mobile widget URL builder
//!
//! The mobile widget is loaded from
//! `/a/{tenantAlias}/widgets/mobilewidget?...` and, in secure mode, its query
//! string carries a `checksum` parameter signed with the tenant's API key.
//!
//! # Signed parameters
//!
//! The checksum covers userId, tenantAlias, accountId, firstName, lastName,
//! email, and paymentProviderId when it is not `"NULL"`. The payment provider
//! id is written to the final URL in every case (including `"NULL"`) and
//! locale is appended when set; neither is part of the signed set beyond the
//! rule above. The service verifies exactly this layout.

use std::collections::BTreeMap;

use tracing::debug;
use url::Url;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Host serving the mobile widget
pub const DEFAULT_WIDGET_HOST: &str = "http://app.referralsaasquatch.com";

/// Placeholder the service expects when a user has no payment provider id
pub const NULL_PAYMENT_PROVIDER: &str = "NULL";

/// A tenant and its widget settings
#[derive(Debug, Clone)]
pub struct Tenant {
    credentials: Credentials,
    secure_mode: bool,
    widget_host: String,
}

impl Tenant {
    /// Create a tenant with secure mode enabled
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            secure_mode: true,
            widget_host: DEFAULT_WIDGET_HOST.to_string(),
        }
    }

    /// Stop signing widget URLs
    pub fn disable_secure_mode(mut self) -> Self {
        self.secure_mode = false;
        self
    }

    /// Serve widgets from a different host
    pub fn with_widget_host(mut self, host: impl Into<String>) -> Self {
        self.widget_host = host.into();
        self
    }

    /// Whether widget URLs carry a checksum
    pub fn is_secure(&self) -> bool {
        self.secure_mode
    }

    /// Get the tenant credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Start building a widget URL for a user
    pub fn mobile_widget(
        &self,
        user_id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
    ) -> MobileWidget<'_> {
        MobileWidget::new(self, user_id, email, first_name)
    }
}

/// Builder for a signed mobile widget URL
#[derive(Debug, Clone)]
pub struct MobileWidget<'a> {
    tenant: &'a Tenant,

    user_id: String,
    account_id: String,
    payment_provider_id: String,

    first_name: String,
    last_name: String,
    email: String,
    locale: String,
}

impl<'a> MobileWidget<'a> {
    /// Create a builder; the account id defaults to the user id
    pub fn new(
        tenant: &'a Tenant,
        user_id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into();
        Self {
            tenant,
            account_id: user_id.clone(),
            user_id,
            payment_provider_id: NULL_PAYMENT_PROVIDER.to_string(),
            first_name: first_name.into(),
            last_name: String::new(),
            email: email.into(),
            locale: String::new(),
        }
    }

    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    pub fn with_payment(mut self, payment_provider_id: impl Into<String>) -> Self {
        self.payment_provider_id = payment_provider_id.into();
        self
    }

    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = name.into();
        self
    }

    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the widget locale (e.g. "en_US"); not covered by the checksum
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Parameters covered by the checksum
    fn signed_params(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("userId", self.user_id.clone());
        params.insert("tenantAlias", self.tenant.credentials.tenant_alias().to_string());
        params.insert("accountId", self.account_id.clone());

        if self.payment_provider_id != NULL_PAYMENT_PROVIDER {
            params.insert("paymentProviderId", self.payment_provider_id.clone());
        }

        params.insert("firstName", self.first_name.clone());
        params.insert("lastName", self.last_name.clone());
        params.insert("email", self.email.clone());
        params
    }

    /// Checksum for the current parameters, regardless of secure mode
    pub fn checksum(&self) -> AuthResult<String> {
        let params = self.signed_params();
        self.tenant
            .credentials
            .widget_signer()
            .sign(params.iter().map(|(k, v)| (*k, v.as_str())))
    }

    /// Build the widget URL
    ///
    /// Query parameters are form-encoded in ascending key order.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the widget host does not parse and
    /// `EmptyChecksum` if signing produced nothing.
    pub fn build_url(&self) -> AuthResult<String> {
        let alias = self.tenant.credentials.tenant_alias();

        let mut url = Url::parse(&self.tenant.widget_host)?;
        url.set_path(&format!("/a/{}/widgets/mobilewidget", alias));

        let mut params = self.signed_params();

        if self.tenant.secure_mode {
            let checksum = self.checksum()?;
            if checksum.is_empty() {
                return Err(AuthError::EmptyChecksum);
            }
            params.insert("checksum", checksum);
        }

        params.insert("paymentProviderId", self.payment_provider_id.clone());
        if !self.locale.is_empty() {
            params.insert("locale", self.locale.clone());
        }

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in &params {
                query.append_pair(key, value);
            }
        }

        debug!(
            tenant = alias,
            secure = self.tenant.secure_mode,
            "Built mobile widget URL"
        );

        Ok(url.into())
    }
}
