//! Tracing subscriber setup.
//!
//! One initialization entry point shared by the server binary and
//! integration tests. The filter comes from `RUST_LOG` when set, otherwise
//! from the passed default directive.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install the global tracing subscriber.
///
/// `default_directive` is used when `RUST_LOG` is unset (e.g. `"info"` or
/// `"minutes=debug,info"`). When `json` is true, log lines are emitted as
/// structured JSON for log shipping; otherwise human-readable.
///
/// Safe to call more than once: subsequent calls are no-ops (the first
/// subscriber wins), which keeps tests that share a process from panicking.
pub fn init_tracing(default_directive: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let result = if json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed, keeping existing");
    }
}
