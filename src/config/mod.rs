//! Client settings subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientSettings (validated)
//!     → ConfigSection::create copies what it needs
//! ```
//!
//! # Design Decisions
//! - Settings are plain values passed explicitly; there is no process-wide default
//! - All fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, SettingsError};
pub use schema::{ClientSettings, TransportSettings, UpdatePolicy};
pub use validation::{validate_settings, ValidationError};
