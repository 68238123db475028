//! Console logging setup using `tracing-subscriber`.
//!
//! The core only emits `tracing` events; hosts that want them on a terminal
//! call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initialise a human-readable console subscriber on stderr.
///
/// Filtering is controlled by `RUST_LOG` (default: `info`). Call at most
/// once per process; a second call panics because a global subscriber is
/// already installed.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
