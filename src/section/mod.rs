//! Server-backed config sections.
//!
//! # Data Flow
//! ```text
//! create(name)
//!     → GET {base}/api/config/{name}
//!     → data (mirror)
//!
//! update(partial)
//!     → merge.rs (partial over data, immediately)
//!     → PATCH partial
//!     → data replaced by response body
//! ```
//!
//! # Design Decisions
//! - `data` is an ArcSwap so readers always see a whole object
//! - Concurrent updates are not coordinated by default; the last response wins
//! - No retries; callers re-invoke `load` or `update`

pub mod client;
pub mod merge;

pub use client::ConfigSection;
