//! Core traits for credential storage, login and repository behavior.

mod credential_store;
mod login;
mod repository;

pub use credential_store::{CredentialStore, StoreResult};
pub use login::LoginExchange;
pub use repository::Repository;
