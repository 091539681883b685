//! The registered user of this device.

use serde::{Deserialize, Serialize};

use crate::credentials::Credentials;

/// Role of the registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Master,
    #[default]
    #[serde(other)]
    Worker,
}

impl UserRole {
    /// Parse a wire value; unknown roles are treated as workers.
    pub fn from_value(value: &str) -> Self {
        match value {
            "admin" => UserRole::Admin,
            "master" => UserRole::Master,
            _ => UserRole::Worker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Master => "master",
            UserRole::Worker => "worker",
        }
    }

    /// Admins and masters may edit plans and product state.
    pub fn can_manage(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Master)
    }
}

/// Last-known display data of the registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub role: UserRole,
}

/// Everything saved when a device registration completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub credentials: Credentials,
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_is_worker() {
        assert_eq!(UserRole::from_value("supervisor"), UserRole::Worker);
        assert_eq!(UserRole::from_value("master"), UserRole::Master);
        let role: UserRole = serde_json::from_str("\"foreman\"").unwrap();
        assert_eq!(role, UserRole::Worker);
    }

    #[test]
    fn managers() {
        assert!(UserRole::Admin.can_manage());
        assert!(!UserRole::Worker.can_manage());
    }
}
