//! Error types for the shopfloor client.
//!
//! [`Error`] is the domain error taxonomy. It is built once, at the
//! repository boundary, and handed unchanged to whatever renders it.

use std::fmt;
use thiserror::Error;

/// The domain error type for shopfloor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The server could not be reached (connect, timeout, broken stream).
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The server answered with a non-2xx status.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Anything that could not be classified, including 2xx responses
    /// whose body is empty or not the expected JSON.
    #[error("unknown error: {message}")]
    Unknown { message: String },

    /// Local credential storage failed.
    #[error("storage error: {0}")]
    Dao(#[from] StoreError),

    /// Local validation failed before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Shorthand for [`Error::Unknown`].
    pub fn unknown(message: impl Into<String>) -> Self {
        Error::Unknown {
            message: message.into(),
        }
    }

    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Stable machine code suitable for lookups in a message catalogue.
    pub fn ui_code(&self) -> &str {
        match self {
            Error::Network(_) => "error_network",
            Error::Api(err) => err.code.as_deref().unwrap_or("error_api"),
            Error::Unknown { .. } => "error_unknown",
            Error::Dao(_) => "dao_error",
            Error::InvalidInput(_) => "error_input",
        }
    }

    /// Human-readable message for display to an operator.
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(_) => "No connection to the server".to_string(),
            Error::Api(err) => match err.status {
                401 => "Not authorized".to_string(),
                403 => "Access denied".to_string(),
                404 => err
                    .message
                    .clone()
                    .unwrap_or_else(|| "Resource not found".to_string()),
                status => format!("Server error: {}", status),
            },
            Error::Unknown { .. } => "Unknown error".to_string(),
            Error::Dao(_) => "Local storage error".to_string(),
            Error::InvalidInput(err) => err.to_string(),
        }
    }
}

/// Transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Connection could not be established.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The connection broke while sending or reading.
    #[error("I/O error: {message}")]
    Io { message: String },
}

/// A non-2xx answer from the server.
///
/// `code` and `message` come from the JSON error body (`code` and `detail`)
/// when the server sent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable code from the error body, if any.
    pub code: Option<String>,
    /// Human-readable message from the error body, if any.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Local credential storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The stored state could not be decoded.
    #[error("corrupt state: {message}")]
    Corrupt { message: String },

    /// An in-process lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid product serial number.
    #[error("invalid serial number '{value}': {reason}")]
    SerialNumber { value: String, reason: String },

    /// A scanned code that is neither a product nor a registration payload.
    #[error("unrecognised scan payload: {reason}")]
    Scan { reason: String },

    /// A registration was attempted on an already registered device.
    #[error("device is already registered")]
    AlreadyRegistered,

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
