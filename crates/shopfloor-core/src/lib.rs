//! shopfloor-core - Core types and traits for the shopfloor work-tracking client.
//!
//! Every network-facing operation goes through a [`Repository`], which hands
//! back either a typed value or one [`Error`] from a closed taxonomy. The
//! credential pair and the current bearer token live behind a
//! [`CredentialStore`].

pub mod classify;
pub mod credentials;
pub mod error;
pub mod model;
pub mod password;
pub mod registration;
pub mod scan;
pub mod token;
pub mod traits;
pub mod types;

pub use classify::{Exchange, Lookup, RawResponse, TransportFailure, classify, classify_lookup};
pub use credentials::Credentials;
pub use error::Error;
pub use model::{Profile, UserData, UserRole};
pub use registration::register_device;
pub use scan::{RegistrationCode, Scan, decode_scan};
pub use token::SessionToken;
pub use traits::{CredentialStore, LoginExchange, Repository};
pub use types::{BaseUrl, SerialNumber};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
