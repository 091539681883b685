//! File-backed credential store.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument};
use uuid::Uuid;

use shopfloor_core::error::StoreError;
use shopfloor_core::model::Profile;
use shopfloor_core::traits::{CredentialStore, StoreResult};
use shopfloor_core::{Credentials, SessionToken};

use crate::state::StoredState;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// Credential store persisted as a single JSON file.
///
/// Every write takes an exclusive lock on a sibling `.lock` file, rewrites
/// the whole state into a temporary file and renames it over the target, so
/// readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by the given file. Nothing is touched on disk
    /// until the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn lock(&self) -> StoreResult<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        lock_file.lock_exclusive()?;
        Ok(lock_file)
    }

    fn read_state(&self) -> StoreResult<StoredState> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoredState::default()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(StoredState::default());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            message: format!("{}: {}", self.path.display(), e),
        })
    }

    fn write_state(&self, state: &StoredState) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(state).map_err(|e| StoreError::Corrupt {
            message: e.to_string(),
        })?;

        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));

        let mut options = OpenOptions::new();
        options.create_new(true).write(true);
        #[cfg(unix)]
        options.mode(0o600);

        let written = options.open(&temp_path).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }

    /// Read-modify-write under the file lock.
    fn update(&self, apply: impl FnOnce(&mut StoredState)) -> StoreResult<()> {
        let lock_file = self.lock()?;

        let mut state = self.read_state()?;
        apply(&mut state);
        self.write_state(&state)?;

        lock_file.unlock()?;
        Ok(())
    }

    fn snapshot(&self) -> StoreResult<StoredState> {
        self.read_state()
    }
}

impl CredentialStore for FileCredentialStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save_credentials(&self, credentials: &Credentials) -> StoreResult<()> {
        self.update(|state| state.set_credentials(credentials))?;
        debug!(identifier = credentials.identifier(), "Saved credentials");
        Ok(())
    }

    fn credentials(&self) -> StoreResult<Option<Credentials>> {
        Ok(self.snapshot()?.credentials())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save_token(&self, token: &SessionToken) -> StoreResult<()> {
        self.update(|state| state.set_token(token))?;
        debug!("Saved session token");
        Ok(())
    }

    fn token(&self) -> StoreResult<Option<SessionToken>> {
        Ok(self.snapshot()?.token())
    }

    fn save_profile(&self, profile: &Profile) -> StoreResult<()> {
        self.update(|state| state.set_profile(profile))
    }

    fn profile(&self) -> StoreResult<Option<Profile>> {
        Ok(self.snapshot()?.profile())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn clear(&self) -> StoreResult<()> {
        let lock_file = self.lock()?;

        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Cleared credential store"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        lock_file.unlock()?;
        Ok(())
    }
}
