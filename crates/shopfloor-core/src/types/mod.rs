//! Validated identifier types.
//!
//! These types enforce their invariants at construction time so the
//! transport never has to re-check them.

mod base_url;
mod serial;

pub use base_url::{BaseUrl, DEFAULT_BASE_URL};
pub use serial::SerialNumber;
