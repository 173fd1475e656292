//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ConfigSection round trips produce:
//!     → tracing events (request IDs, status, section name)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → logging.rs installs a subscriber (CLI, or the host application)
//!     → any `metrics` recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing subscribers and exporters is the caller's job
//! - Log level configurable via `RUST_LOG`

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
