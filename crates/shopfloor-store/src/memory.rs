//! In-memory credential store.

use std::sync::RwLock;

use shopfloor_core::error::StoreError;
use shopfloor_core::model::Profile;
use shopfloor_core::traits::{CredentialStore, StoreResult};
use shopfloor_core::{Credentials, SessionToken};

use crate::state::StoredState;

/// Credential store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    state: RwLock<StoredState>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a credential pair.
    pub fn with_credentials(credentials: &Credentials) -> Self {
        let mut state = StoredState::default();
        state.set_credentials(credentials);
        Self {
            state: RwLock::new(state),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&StoredState) -> T) -> StoreResult<T> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&state))
    }

    fn write(&self, f: impl FnOnce(&mut StoredState)) -> StoreResult<()> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
        f(&mut state);
        Ok(())
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save_credentials(&self, credentials: &Credentials) -> StoreResult<()> {
        self.write(|state| state.set_credentials(credentials))
    }

    fn credentials(&self) -> StoreResult<Option<Credentials>> {
        self.read(StoredState::credentials)
    }

    fn save_token(&self, token: &SessionToken) -> StoreResult<()> {
        self.write(|state| state.set_token(token))
    }

    fn token(&self) -> StoreResult<Option<SessionToken>> {
        self.read(StoredState::token)
    }

    fn save_profile(&self, profile: &Profile) -> StoreResult<()> {
        self.write(|state| state.set_profile(profile))
    }

    fn profile(&self) -> StoreResult<Option<Profile>> {
        self.read(StoredState::profile)
    }

    fn clear(&self) -> StoreResult<()> {
        self.write(|state| *state = StoredState::default())
    }
}
