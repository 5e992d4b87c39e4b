//! User records

use serde::{Deserialize, Serialize};

/// A user belonging to an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier, unique within the account
    #[serde(default)]
    pub id: String,
    /// Owning account
    #[serde(default)]
    pub account_id: String,
    /// Code the user shares with friends, assigned by the service when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Create a user payload with the required fields
    pub fn new(
        id: impl Into<String>,
        account_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: account_id.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set first and last name
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Set the referral code
    pub fn with_referral_code(mut self, code: impl Into<String>) -> Self {
        self.referral_code = Some(code.into());
        self
    }

    /// Set the avatar URL
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_required_fields_always_serialized() {
        let user = User::new("u1", "a1", "e@x.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "u1",
                "accountId": "a1",
                "email": "e@x.com",
                "firstName": "",
                "lastName": ""
            })
        );
    }

    #[test]
    fn test_user_round_trip() {
        let user = User::new("u1", "a1", "e@x.com")
            .with_name("Ada", "Lovelace")
            .with_referral_code("ADALOVELACE")
            .with_image_url("https://img.example/ada.png");

        let bytes = serde_json::to_vec(&user).unwrap();
        let decoded: User = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, user);
    }
}
