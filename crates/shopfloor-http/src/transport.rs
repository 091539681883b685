//! Authenticated request execution.

use tracing::{debug, instrument};

use shopfloor_core::Exchange;

use crate::auth::{AttemptChain, Authenticator, RefreshDecision};
use crate::client::HttpClient;
use crate::request::ApiRequest;

/// Sends requests with the cached token and recovers from one expired
/// token per logical request.
#[derive(Debug)]
pub struct AuthedTransport {
    http: HttpClient,
    auth: Authenticator,
}

impl AuthedTransport {
    pub fn new(http: HttpClient, auth: Authenticator) -> Self {
        Self { http, auth }
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    /// Run one logical request.
    ///
    /// A 401 is answered with at most one login and one retry. When the
    /// guard refuses or the login fails, the 401 itself is returned so the
    /// caller classifies it like any other response.
    #[instrument(skip_all, fields(method = %request.method(), path = request.path()))]
    pub async fn execute(&self, request: &ApiRequest) -> Exchange {
        let mut chain = AttemptChain::start();
        let mut token = self.auth.current_token();

        loop {
            let response = self.http.send(request, token.as_ref()).await?;
            if !response.is_unauthorized() {
                return Ok(response);
            }

            if let RefreshDecision::GiveUp(reason) = self.auth.decide(chain, token.as_ref()) {
                debug!(?reason, chain = chain.len(), "Not retrying rejected request");
                return Ok(response);
            }

            match self.auth.refresh(token.as_ref()).await {
                Some(fresh) => {
                    debug!("Retrying with refreshed token");
                    token = Some(fresh);
                    chain = chain.next();
                }
                None => return Ok(response),
            }
        }
    }
}
