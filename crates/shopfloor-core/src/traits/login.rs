//! Login exchange trait.

use async_trait::async_trait;

use crate::credentials::Credentials;
use crate::token::SessionToken;
use crate::Result;

/// Exchanges stored credentials for a fresh session token.
///
/// One call is one network round trip: implementations never retry and
/// never persist the token themselves.
#[async_trait]
pub trait LoginExchange: Send + Sync + std::fmt::Debug {
    async fn exchange(&self, credentials: &Credentials) -> Result<SessionToken>;
}
