//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries and tests
//! - Configure log level from `RUST_LOG`, falling back to a default directive
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Install a global subscriber. Fails if one is already installed.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
