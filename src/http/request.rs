//! Request construction.
//!
//! # Responsibilities
//! - Build the resource URL for a named section
//! - Generate a unique request ID per round trip
//!
//! # Design Decisions
//! - The section name is always a single path segment, percent-encoded
//!   with `url`'s path-segment set. Space, `/`, `?`, `#` and `%` are
//!   escaped; `@ : $ & + , ; =` stay literal, unlike `encodeURIComponent`.
//!   Servers decode both forms to the same name.
//! - Query and fragment on the base URL are dropped

use url::Url;
use uuid::Uuid;

use crate::error::{ConfigError, ConfigResult};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Path segments between the base URL and the section name.
pub const SERVICE_PATH: [&str; 2] = ["api", "config"];

/// Build `{base_url}/api/config/{name}` with `name` percent-encoded.
pub fn resource_url(base_url: &str, name: &str) -> ConfigResult<Url> {
    let mut url = Url::parse(base_url).map_err(|source| ConfigError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|_| ConfigError::CannotBeABase(base_url.to_string()))?
        .pop_if_empty()
        .extend(SERVICE_PATH)
        .push(name);

    Ok(url)
}

/// Generate a fresh request ID (UUID v4).
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}
