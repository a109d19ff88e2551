//! Diagnostic logging.
//!
//! Everything goes to stderr; stdout carries only the generated page.
//! `RUST_LOG` overrides the level picked from `--verbose` / `--debug`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.level().into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
