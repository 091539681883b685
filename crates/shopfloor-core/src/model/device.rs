//! Device registration and employee QR payloads.

use serde::{Deserialize, Serialize};

/// Hardware description sent along with a registration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceInfo {
    pub model: String,
    pub manufacturer: String,
}

impl DeviceInfo {
    /// Describe the host this process runs on.
    pub fn host() -> Self {
        Self {
            model: std::env::consts::OS.to_string(),
            manufacturer: std::env::consts::ARCH.to_string(),
        }
    }
}

/// Request body for registering a device to a user.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRequest {
    pub device_id: String,
    pub model: String,
    pub manufacturer: String,
    pub token: String,
    pub password: String,
    pub user_id: i64,
}

impl std::fmt::Debug for DeviceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceRequest")
            .field("device_id", &self.device_id)
            .field("model", &self.model)
            .field("manufacturer", &self.manufacturer)
            .field("user_id", &self.user_id)
            .field("token", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response from device registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceResponse {
    pub user_id: i64,
    pub device_id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_role: String,
}

/// Server-issued content for an employee's registration QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrData {
    pub action: String,
    pub id: i64,
    pub token: String,
}

impl QrData {
    /// The exact text to encode into the QR image.
    pub fn to_qr_content(&self) -> String {
        serde_json::json!({
            "action": self.action,
            "id": self.id,
            "token": self.token,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_content_round_trips_through_scan_format() {
        let qr = QrData {
            action: "register".to_string(),
            id: 12,
            token: "abc".to_string(),
        };
        let parsed: serde_json::Value = serde_json::from_str(&qr.to_qr_content()).unwrap();
        assert_eq!(parsed["action"], "register");
        assert_eq!(parsed["id"], 12);
    }

    #[test]
    fn device_request_debug_is_redacted() {
        let req = DeviceRequest {
            device_id: "d".into(),
            model: "m".into(),
            manufacturer: "x".into(),
            token: "tok-123".into(),
            password: "pw-456".into(),
            user_id: 1,
        };
        let debug = format!("{:?}", req);
        assert!(!debug.contains("tok-123"));
        assert!(!debug.contains("pw-456"));
    }
}
