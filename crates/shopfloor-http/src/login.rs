//! Credential-for-token exchange over HTTP.

use async_trait::async_trait;
use tracing::{debug, instrument};

use shopfloor_core::model::{LoginRequest, LoginResponse};
use shopfloor_core::{Credentials, Error, LoginExchange, Result, SessionToken, classify};

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::endpoints;
use crate::request::ApiRequest;

/// Logs in with `POST auth/login_json`.
///
/// Uses its own [`HttpClient`] with no authenticator in front of it, so a
/// rejected login can never recurse into another login.
#[derive(Debug, Clone)]
pub struct HttpLoginExchange {
    http: HttpClient,
}

impl HttpLoginExchange {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }
}

#[async_trait]
impl LoginExchange for HttpLoginExchange {
    #[instrument(skip_all, fields(identifier = credentials.identifier()))]
    async fn exchange(&self, credentials: &Credentials) -> Result<SessionToken> {
        let request = ApiRequest::post(endpoints::LOGIN).with_json(&LoginRequest {
            username: credentials.identifier(),
            password: credentials.secret(),
        })?;

        let exchange = self.http.send(&request, None).await;
        let response: LoginResponse = classify(&exchange)?;

        let token = SessionToken::new(response.access_token);
        if token.is_blank() {
            return Err(Error::unknown("login response carried an empty token"));
        }

        debug!(token_type = response.token_type.as_deref(), "Login succeeded");
        Ok(token)
    }
}
