//! Client configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use shopfloor_core::BaseUrl;
use shopfloor_core::error::{Error, InvalidInputError};

/// Per-request timeout used unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the authenticator decides that a 401 must not trigger another login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RefreshGuard {
    /// Stop once the logical request has already been retried.
    #[default]
    ChainLength,
    /// Stop when the rejected request already carried a bearer token.
    AuthorizationHeader,
}

impl RefreshGuard {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshGuard::ChainLength => "chain",
            RefreshGuard::AuthorizationHeader => "header",
        }
    }
}

impl fmt::Display for RefreshGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshGuard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chain" => Ok(RefreshGuard::ChainLength),
            "header" => Ok(RefreshGuard::AuthorizationHeader),
            other => Err(InvalidInputError::Other {
                message: format!("unknown refresh guard '{}' (expected chain or header)", other),
            }
            .into()),
        }
    }
}

/// Settings shared by every HTTP client of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: BaseUrl,
    pub timeout: Duration,
    pub user_agent: String,
    pub refresh_guard: RefreshGuard,
}

impl ClientConfig {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("shopfloor/", env!("CARGO_PKG_VERSION")).to_string(),
            refresh_guard: RefreshGuard::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_refresh_guard(mut self, guard: RefreshGuard) -> Self {
        self.refresh_guard = guard;
        self
    }
}
