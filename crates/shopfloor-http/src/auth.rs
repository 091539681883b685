//! Token refresh on 401.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use shopfloor_core::{CredentialStore, LoginExchange, SessionToken};

use crate::config::RefreshGuard;

/// Upper bound on responses within one logical request: the original
/// response plus one retry.
pub const MAX_CHAIN_LEN: u32 = 2;

/// Number of responses received so far for one logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptChain {
    len: u32,
}

impl AttemptChain {
    /// The chain after the first response.
    pub fn start() -> Self {
        Self { len: 1 }
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    /// The chain after one more response.
    pub fn next(self) -> Self {
        Self { len: self.len + 1 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.len >= MAX_CHAIN_LEN
    }
}

/// Why a 401 is surfaced instead of retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveUp {
    /// The logical request was already retried once.
    ChainExhausted,
    /// The rejected request already carried a token.
    AlreadyAuthorized,
}

/// Outcome of the refresh decision for one 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    Refresh,
    GiveUp(GiveUp),
}

/// Supplies tokens for outgoing requests and obtains a new one when the
/// server rejects the current one.
///
/// Refreshes are single-flight: concurrent requests that fail with the same
/// stale token wait for one login and then share its result.
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    login: Arc<dyn LoginExchange>,
    guard: RefreshGuard,
    refresh_lock: Mutex<()>,
}

impl Authenticator {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        login: Arc<dyn LoginExchange>,
        guard: RefreshGuard,
    ) -> Self {
        Self {
            store,
            login,
            guard,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    pub fn guard(&self) -> RefreshGuard {
        self.guard
    }

    /// The token to attach to the next request, if any.
    ///
    /// A store that cannot be read is treated as holding no token; the
    /// request then goes out unauthenticated and a 401 takes the refresh path.
    pub fn current_token(&self) -> Option<SessionToken> {
        match self.store.token() {
            Ok(token) => token.filter(|t| !t.is_blank()),
            Err(e) => {
                warn!(error = %e, "Failed to read cached token");
                None
            }
        }
    }

    /// Decide whether a 401 may be answered with a login and a retry.
    ///
    /// The chain bound always applies. The header guard additionally
    /// refuses when the rejected request already carried a token.
    pub fn decide(&self, chain: AttemptChain, sent: Option<&SessionToken>) -> RefreshDecision {
        if chain.is_exhausted() {
            return RefreshDecision::GiveUp(GiveUp::ChainExhausted);
        }

        match self.guard {
            RefreshGuard::ChainLength => RefreshDecision::Refresh,
            RefreshGuard::AuthorizationHeader if sent.is_some() => {
                RefreshDecision::GiveUp(GiveUp::AlreadyAuthorized)
            }
            RefreshGuard::AuthorizationHeader => RefreshDecision::Refresh,
        }
    }

    /// Obtain a token to retry with after `stale` was rejected.
    ///
    /// Returns `None` when no credentials are stored or the login fails; the
    /// caller then surfaces the original 401. A successful login is persisted
    /// before it is returned.
    #[instrument(skip_all, fields(had_token = stale.is_some()))]
    pub async fn refresh(&self, stale: Option<&SessionToken>) -> Option<SessionToken> {
        let _flight = self.refresh_lock.lock().await;

        if let Some(current) = self.current_token() {
            if stale != Some(&current) {
                debug!("Token already refreshed by a concurrent request");
                return Some(current);
            }
        }

        let credentials = match self.store.credentials() {
            Ok(Some(credentials)) => credentials,
            Ok(None) => {
                warn!("No stored credentials, cannot refresh token");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored credentials");
                return None;
            }
        };

        info!("Refreshing session token");
        let token = match self.login.exchange(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                return None;
            }
        };

        if let Err(e) = self.store.save_token(&token) {
            warn!(error = %e, "Failed to persist refreshed token");
        }

        Some(token)
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("store", &self.store)
            .field("login", &self.login)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shopfloor_core::error::ApiError;
    use shopfloor_core::{Credentials, Result};
    use shopfloor_store::MemoryCredentialStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CountingLogin {
        token: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl CountingLogin {
        fn issuing(token: &'static str) -> Arc<Self> {
            Arc::new(Self {
                token: Some(token),
                calls: AtomicUsize::new(0),
            })
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self {
                token: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LoginExchange for CountingLogin {
        async fn exchange(&self, _credentials: &Credentials) -> Result<SessionToken> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.token {
                Some(token) => Ok(SessionToken::new(token)),
                None => Err(ApiError::new(401, None, Some("Incorrect username or password".into())).into()),
            }
        }
    }

    fn registered_store() -> Arc<MemoryCredentialStore> {
        Arc::new(MemoryCredentialStore::with_credentials(&Credentials::new(
            "worker@example.com",
            "pw",
        )))
    }

    #[test]
    fn chain_bound() {
        let chain = AttemptChain::start();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_exhausted());
        assert!(chain.next().is_exhausted());
        assert_eq!(chain.next().len(), MAX_CHAIN_LEN);
    }

    #[test]
    fn chain_guard_allows_first_refresh_only() {
        let auth = Authenticator::new(
            registered_store(),
            CountingLogin::issuing("T1"),
            RefreshGuard::ChainLength,
        );
        let token = SessionToken::new("T0");

        assert_eq!(auth.decide(AttemptChain::start(), Some(&token)), RefreshDecision::Refresh);
        assert_eq!(
            auth.decide(AttemptChain::start().next(), Some(&token)),
            RefreshDecision::GiveUp(GiveUp::ChainExhausted)
        );
    }

    #[test]
    fn header_guard_refuses_authorized_request() {
        let auth = Authenticator::new(
            registered_store(),
            CountingLogin::issuing("T1"),
            RefreshGuard::AuthorizationHeader,
        );

        assert_eq!(
            auth.decide(AttemptChain::start(), Some(&SessionToken::new("T0"))),
            RefreshDecision::GiveUp(GiveUp::AlreadyAuthorized)
        );
        assert_eq!(auth.decide(AttemptChain::start(), None), RefreshDecision::Refresh);
    }

    #[tokio::test]
    async fn refresh_persists_new_token() {
        let store = registered_store();
        let login = CountingLogin::issuing("T1");
        let auth = Authenticator::new(store.clone(), login.clone(), RefreshGuard::ChainLength);

        let token = auth.refresh(None).await;

        assert_eq!(token, Some(SessionToken::new("T1")));
        assert_eq!(store.token().unwrap(), Some(SessionToken::new("T1")));
        assert_eq!(login.calls(), 1);
    }

    #[tokio::test]
    async fn refresh_without_credentials_is_terminal() {
        let login = CountingLogin::issuing("T1");
        let auth = Authenticator::new(
            Arc::new(MemoryCredentialStore::new()),
            login.clone(),
            RefreshGuard::ChainLength,
        );

        assert_eq!(auth.refresh(None).await, None);
        assert_eq!(login.calls(), 0);
    }

    #[tokio::test]
    async fn failed_login_is_terminal() {
        let store = registered_store();
        store.save_token(&SessionToken::new("T0")).unwrap();
        let auth = Authenticator::new(store.clone(), CountingLogin::rejecting(), RefreshGuard::ChainLength);

        assert_eq!(auth.refresh(Some(&SessionToken::new("T0"))).await, None);
        assert_eq!(store.token().unwrap(), Some(SessionToken::new("T0")));
    }

    #[tokio::test]
    async fn newer_token_is_reused() {
        let store = registered_store();
        store.save_token(&SessionToken::new("T2")).unwrap();
        let login = CountingLogin::issuing("T3");
        let auth = Authenticator::new(store, login.clone(), RefreshGuard::ChainLength);

        let token = auth.refresh(Some(&SessionToken::new("T1"))).await;

        assert_eq!(token, Some(SessionToken::new("T2")));
        assert_eq!(login.calls(), 0);
    }
}
