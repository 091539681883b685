//! Decoding of scanned QR/barcode payloads.
//!
//! A scan is either a product label (a bare serial number) or a device
//! registration code issued by a manager, which is a small JSON object:
//!
//! ```json
//! { "action": "register", "id": 17, "token": "..." }
//! ```

use serde::Deserialize;
use uuid::Uuid;

use crate::Result;
use crate::error::InvalidInputError;
use crate::model::{DeviceInfo, DeviceRequest};
use crate::password::{DEVICE_PASSWORD_LEN, generate_password};
use crate::types::SerialNumber;

/// Product labels start with this prefix.
pub const PRODUCT_CODE_PREFIX: &str = "UF";

const REGISTER_ACTION: &str = "register";

/// A decoded scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    Product(SerialNumber),
    Registration(RegistrationCode),
}

/// One-time code binding a device to a user.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationCode {
    pub user_id: i64,
    pub token: String,
}

impl RegistrationCode {
    /// Build the registration request for this device: a fresh random
    /// device id and a generated password that becomes the login secret.
    pub fn device_request(&self, device: &DeviceInfo) -> DeviceRequest {
        DeviceRequest {
            device_id: Uuid::new_v4().to_string(),
            model: device.model.clone(),
            manufacturer: device.manufacturer.clone(),
            token: self.token.clone(),
            password: generate_password(DEVICE_PASSWORD_LEN),
            user_id: self.user_id,
        }
    }
}

impl std::fmt::Debug for RegistrationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationCode")
            .field("user_id", &self.user_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ScanBody {
    action: Option<String>,
    id: Option<i64>,
    token: Option<String>,
}

/// True when the payload is a product label.
pub fn is_product_code(raw: &str) -> bool {
    raw.trim().starts_with(PRODUCT_CODE_PREFIX)
}

/// Decode a raw scan payload.
///
/// # Errors
///
/// Returns [`InvalidInputError::Scan`] for anything that is neither a
/// product label nor a well-formed registration code.
pub fn decode_scan(raw: &str) -> Result<Scan> {
    if is_product_code(raw) {
        return Ok(Scan::Product(SerialNumber::new(raw)?));
    }

    let body: ScanBody = serde_json::from_str(raw.trim()).map_err(|e| InvalidInputError::Scan {
        reason: format!("not a product code or JSON object: {}", e),
    })?;

    match body.action.as_deref() {
        Some(REGISTER_ACTION) => {}
        Some(other) => {
            return Err(InvalidInputError::Scan {
                reason: format!("unsupported action '{}'", other),
            }
            .into());
        }
        None => {
            return Err(InvalidInputError::Scan {
                reason: "missing action".to_string(),
            }
            .into());
        }
    }

    match (body.id, body.token) {
        (Some(user_id), Some(token)) if !token.is_empty() => {
            Ok(Scan::Registration(RegistrationCode { user_id, token }))
        }
        _ => Err(InvalidInputError::Scan {
            reason: "registration code needs id and token".to_string(),
        }
        .into()),
    }
}
