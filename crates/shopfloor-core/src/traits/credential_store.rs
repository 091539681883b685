//! Credential store trait.

use crate::credentials::Credentials;
use crate::error::StoreError;
use crate::model::{Profile, UserData};
use crate::token::SessionToken;

/// Result type for credential store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Durable storage for the login pair, the cached token and the last-known
/// profile.
///
/// Implementations make each individual write atomic. Callers must not
/// assume atomicity across separate calls.
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Overwrite the stored identifier and secret.
    fn save_credentials(&self, credentials: &Credentials) -> StoreResult<()>;

    /// Returns the stored pair, or `None` unless both halves are present.
    fn credentials(&self) -> StoreResult<Option<Credentials>>;

    /// Replace the cached session token.
    fn save_token(&self, token: &SessionToken) -> StoreResult<()>;

    /// Returns the cached session token.
    fn token(&self) -> StoreResult<Option<SessionToken>>;

    /// Replace the last-known profile.
    fn save_profile(&self, profile: &Profile) -> StoreResult<()>;

    /// Returns the last-known profile.
    fn profile(&self) -> StoreResult<Option<Profile>>;

    /// Erase everything. Succeeds on an already empty store.
    fn clear(&self) -> StoreResult<()>;

    /// Save the outcome of a device registration.
    fn save_user(&self, user: &UserData) -> StoreResult<()> {
        self.save_credentials(&user.credentials)?;
        self.save_profile(&user.profile)
    }

    /// True when a complete credential pair is stored.
    fn is_registered(&self) -> StoreResult<bool> {
        Ok(self.credentials()?.is_some())
    }
}
