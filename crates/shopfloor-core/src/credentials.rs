//! Login credentials type.

use std::fmt;

/// The identifier/secret pair exchanged for a session token.
///
/// Owned by the credential store; immutable once built.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use shopfloor_core::Credentials;
///
/// let creds = Credentials::new("operator@plant.example", "s3cret");
/// assert_eq!(creds.identifier(), "operator@plant.example");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Create new credentials. No format validation is performed.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Returns the login identifier (usually an email).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the secret.
    ///
    /// # Security
    ///
    /// Use this only when building the login request or persisting the pair.
    /// Never log or display this value.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_secret_in_debug() {
        let creds = Credentials::new("worker@plant.example", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("worker@plant.example"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
