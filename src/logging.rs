//! Diagnostics setup.
//!
//! Logs go to stderr and default to warnings only, so that typed responses on
//! stdout are not interleaved with log lines unless `RUST_LOG` asks for more.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}
