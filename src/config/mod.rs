//! Environment-driven service configuration.

mod loader;
mod types;

pub use loader::{DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_BIND_ADDR, DEFAULT_MAX_CONNECTIONS};
pub use types::{DbParts, ServiceConfig};
