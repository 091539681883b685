//! shopfloor-http - HTTP implementation of the shopfloor repository.
//!
//! Requests flow through three layers:
//!
//! - [`HttpClient`] sends one request and returns the raw [`Exchange`](shopfloor_core::Exchange).
//! - [`AuthedTransport`] attaches the cached token and, on a 401, lets the
//!   [`Authenticator`] log in again and retry once.
//! - [`HttpRepository`] classifies every exchange into a typed value or a
//!   domain error.

mod api;
mod auth;
mod client;
mod config;
pub mod endpoints;
mod login;
mod repository;
mod request;
mod transport;

pub use api::ApiClient;
pub use auth::{AttemptChain, Authenticator, GiveUp, MAX_CHAIN_LEN, RefreshDecision};
pub use client::HttpClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT, RefreshGuard};
pub use login::HttpLoginExchange;
pub use repository::HttpRepository;
pub use request::ApiRequest;
pub use transport::AuthedTransport;
