//! Tenant credentials and signed widget URLs for the SaaSquatch referral API
//!
//! Every API call is scoped to a tenant alias and authenticated with the
//! tenant's API key. The same key signs the query string of the embeddable
//! mobile widget so the service can reject tampered parameters.
//!
//! # Example
//!
//! ```no_run
//! use saasquatch_auth::{Credentials, Tenant};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads SAASQUATCH_TENANT_ALIAS and SAASQUATCH_API_KEY
//!     let creds = Credentials::from_env()?;
//!     let tenant = Tenant::new(creds);
//!
//!     let url = tenant
//!         .mobile_widget("user-1", "user@example.com", "Ada")
//!         .with_last_name("Lovelace")
//!         .with_locale("en_US")
//!         .build_url()?;
//!     println!("Widget: {}", url);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod widget;

pub use credentials::{Credentials, WidgetSigner, API_KEY_ENV, BASIC_AUTH_USERNAME, TENANT_ALIAS_ENV};
pub use error::{AuthError, AuthResult};
pub use widget::{MobileWidget, Tenant, DEFAULT_WIDGET_HOST, NULL_PAYMENT_PROVIDER};
