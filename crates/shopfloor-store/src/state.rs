//! Persisted credential state.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use shopfloor_core::model::{Profile, UserRole};
use shopfloor_core::{Credentials, SessionToken};

/// Everything a credential store remembers. Each field is independent so a
/// token can be cached before a profile is known and vice versa.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl StoredState {
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.identifier, &self.secret) {
            (Some(identifier), Some(secret)) => {
                Some(Credentials::new(identifier.clone(), secret.clone()))
            }
            _ => None,
        }
    }

    pub fn set_credentials(&mut self, credentials: &Credentials) {
        self.identifier = Some(credentials.identifier().to_string());
        self.secret = Some(credentials.secret().to_string());
        self.touch();
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.token.as_deref().map(SessionToken::new)
    }

    pub fn set_token(&mut self, token: &SessionToken) {
        self.token = Some(token.as_str().to_string());
        self.touch();
    }

    pub fn profile(&self) -> Option<Profile> {
        self.display_name.as_ref().map(|name| Profile {
            display_name: name.clone(),
            role: self.role.unwrap_or_default(),
        })
    }

    pub fn set_profile(&mut self, profile: &Profile) {
        self.display_name = Some(profile.display_name.clone());
        self.role = Some(profile.role);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now().to_rfc3339());
    }
}

impl std::fmt::Debug for StoredState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredState")
            .field("identifier", &self.identifier)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
