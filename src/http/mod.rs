//! HTTP plumbing for talking to the config service.
//!
//! # Data Flow
//! ```text
//! ConfigSection
//!     → request.rs (resource URL, request ID)
//!     → transport.rs (reqwest client, per-request settings)
//!     → config service
//!     → response.rs (status check, JSON object decode)
//!     → ConfigSection
//! ```

pub mod request;
pub mod response;
pub mod transport;

pub use request::{resource_url, X_REQUEST_ID};
pub use transport::Transport;
