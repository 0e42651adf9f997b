//! Tracing setup
//!
//! Hosts call [`init_tracing`] once at startup. Filtering follows
//! `RUST_LOG`, defaulting to `info` when unset.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls are no-ops, which keeps test
/// binaries that initialize eagerly from panicking.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
