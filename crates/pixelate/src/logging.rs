//! Log output for the binaries.

use tracing_subscriber::EnvFilter;

/// Installs the `fmt` subscriber. `RUST_LOG` selects the level; the default
/// is `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();
}
