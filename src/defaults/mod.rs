//! Defaults overlay for config sections.
//!
//! # Data Flow
//! ```text
//! get(key)
//!     → section.data()[class]?[key]
//!     → policy.rs decides whether defaults[key] wins
//!
//! set(key, value)
//!     → {class: {key: value}} or {key: value}
//!     → section.update(...)
//! ```
//!
//! Views hold no state of their own; several may share one section.

pub mod policy;
pub mod view;

pub use policy::FallbackPolicy;
pub use view::ConfigWithDefaults;
