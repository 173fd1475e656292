//! Client for a remote JSON configuration service.
//!
//! A [`ConfigSection`] mirrors one named config object served at
//! `{base_url}/api/config/{name}` and applies partial updates with PATCH.
//! A [`ConfigWithDefaults`] layers local defaults and an optional class
//! scope on top of a shared section.
//!
//! ```no_run
//! use std::sync::Arc;
//! use remote_config::{ClientSettings, ConfigSection, ConfigWithDefaults};
//! use serde_json::json;
//!
//! # async fn run() -> remote_config::ConfigResult<()> {
//! let settings = ClientSettings::with_base_url("http://localhost:8888/");
//! let section = Arc::new(ConfigSection::create("notebook", &settings).await?);
//!
//! let view = ConfigWithDefaults::new(section, None, Some("Editor".into()));
//! view.set("line_numbers", json!(true)).await?;
//! assert_eq!(view.get("line_numbers"), Some(json!(true)));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod http;
pub mod observability;
pub mod section;

/// A JSON object, the unit every section stores and exchanges.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

pub use config::{ClientSettings, TransportSettings, UpdatePolicy};
pub use defaults::{ConfigWithDefaults, FallbackPolicy};
pub use error::{ConfigError, ConfigResult};
pub use section::ConfigSection;
