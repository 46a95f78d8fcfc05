//! Tracing subscriber setup for the `paw` binary.
//!
//! Everything goes to stderr. `paw insights --json` writes its report to
//! stdout, and that stream must stay machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber at WARN
///
/// Rule decisions log at `info` and window/store bookkeeping at `debug`,
/// so a plain `paw` run prints only skipped lines and bad records.
/// `RUST_LOG` wins when set.
pub fn init() {
    init_with_level("warn")
}

/// Install the global subscriber with `default_level` as the fallback
/// filter when `RUST_LOG` is unset or unparseable
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route rule decisions into libtest's captured output at debug level
///
/// Safe to call from every test; only the first call installs anything.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
