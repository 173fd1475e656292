//! Client settings definitions.
//!
//! All types derive Serde traits so settings can be read from TOML files.
//! Every field has a default, so an empty file is a valid configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root settings for a config service client.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the service (e.g., "http://localhost:8888/").
    pub base_url: String,

    /// How concurrent updates on one section are coordinated.
    pub update_policy: UpdatePolicy,

    /// Honor HTTP(S)_PROXY environment variables.
    pub system_proxy: bool,

    /// Per-request transport options.
    pub transport: TransportSettings,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888/".to_string(),
            update_policy: UpdatePolicy::default(),
            system_proxy: true,
            transport: TransportSettings::default(),
        }
    }
}

impl ClientSettings {
    /// Default settings pointed at another service.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Coordination of concurrent `update` calls on the same section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Updates run independently; the last response to arrive wins.
    #[default]
    Concurrent,
    /// Updates queue behind each other, one round trip at a time.
    Serialized,
}

/// Options applied to every request a section sends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Total time for request and response, in seconds.
    pub request_timeout_secs: u64,

    /// User-Agent header value.
    pub user_agent: String,

    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            user_agent: concat!("remote-config/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: BTreeMap::new(),
        }
    }
}

impl TransportSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
