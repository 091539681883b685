//! Product serial number type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The serial number printed on a product's QR/barcode label.
///
/// Serial numbers are used as a path segment in product lookups, so they
/// may not be empty, contain whitespace, or contain URL delimiters.
///
/// # Example
///
/// ```
/// use shopfloor_core::SerialNumber;
///
/// let serial = SerialNumber::new(" UF-000123 ").unwrap();
/// assert_eq!(serial.as_str(), "UF-000123");
/// assert!(SerialNumber::new("UF/1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Create a serial number, trimming surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let value = raw.trim();

        let reason = if value.is_empty() {
            Some("must not be empty")
        } else if value.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else if value.contains(['/', '?', '#', '%']) {
            Some("must not contain URL delimiters")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(InvalidInputError::SerialNumber {
                value: raw.to_string(),
                reason: reason.to_string(),
            }
            .into());
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the serial number as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SerialNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for SerialNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SerialNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
