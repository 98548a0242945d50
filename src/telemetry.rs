//! Structured logging setup.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// A subscriber installed earlier is kept; the failed attempt is logged.
pub fn init() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}
