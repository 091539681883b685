//! Wiring of the credential store and repository for one CLI run.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use shopfloor_http::{ClientConfig, HttpRepository};
use shopfloor_store::FileCredentialStore;

use crate::cli::GlobalArgs;

/// Shared state for a command.
#[derive(Debug)]
pub struct AppContext {
    pub config: ClientConfig,
    pub store: Arc<FileCredentialStore>,
    pub repository: HttpRepository,
}

impl AppContext {
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let path = match &args.store {
            Some(path) => path.clone(),
            None => default_store_path()?,
        };

        let config = ClientConfig::new(args.base_url.clone())
            .with_timeout(Duration::from_secs(args.timeout_secs))
            .with_user_agent(concat!("shopfloor-cli/", env!("SHOPFLOOR_VERSION")))
            .with_refresh_guard(args.refresh_guard);

        debug!(store = %path.display(), base_url = %config.base_url, "Using configuration");

        let store = Arc::new(FileCredentialStore::new(path));
        let repository = HttpRepository::new(&config, store.clone())
            .context("Failed to create HTTP client")?;

        Ok(Self {
            config,
            store,
            repository,
        })
    }
}

/// Get the default credential file path.
fn default_store_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "shopfloor").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join("credentials.json"))
}
