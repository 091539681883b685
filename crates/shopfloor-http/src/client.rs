//! Plain HTTP client producing raw exchanges.

use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument, trace};

use shopfloor_core::{BaseUrl, Error, Exchange, RawResponse, Result, SessionToken, TransportFailure};

use crate::config::ClientConfig;
use crate::request::ApiRequest;

/// Sends [`ApiRequest`]s to one API root.
///
/// Never interprets status codes; that is left to the layers above.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unknown`] if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::unknown(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Send a request, attaching `Authorization: Bearer <token>` only when a
    /// token is given.
    #[instrument(skip(self, request, token), fields(method = %request.method(), path = request.path()))]
    pub async fn send(&self, request: &ApiRequest, token: Option<&SessionToken>) -> Exchange {
        let url = self.base_url.endpoint(request.path());
        debug!(authenticated = token.is_some(), "Sending request");

        let mut builder = self.client.request(request.method().clone(), &url);
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, token.bearer());
        }

        let response = builder.send().await.map_err(transport_failure)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_failure)?;
        trace!(status, len = body.len(), "Received response");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn transport_failure(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout
    } else if err.is_connect() {
        TransportFailure::Connect {
            message: err.to_string(),
        }
    } else if err.is_builder() {
        TransportFailure::Other {
            message: err.to_string(),
        }
    } else if err.is_request() || err.is_body() || err.is_decode() {
        TransportFailure::Io {
            message: err.to_string(),
        }
    } else {
        TransportFailure::Other {
            message: err.to_string(),
        }
    }
}
