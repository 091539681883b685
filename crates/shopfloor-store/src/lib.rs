//! shopfloor-store - Credential stores for the shopfloor client.
//!
//! [`FileCredentialStore`] keeps everything in one JSON file that survives
//! restarts. [`MemoryCredentialStore`] is for tests and short-lived tools.

mod file;
mod memory;
mod state;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;
