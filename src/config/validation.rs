//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL is an absolute http(s) URL
//! - Check timeouts are non-zero
//! - Check header names and values are sendable
//!
//! Returns all validation errors, not just the first.

use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};

use crate::config::schema::{ClientSettings, TransportSettings};

/// A single semantic problem found in a settings value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate client settings as a whole.
pub fn validate_settings(settings: &ClientSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&settings.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => errors.push(ValidationError::new(
            "base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::new("base_url", e.to_string())),
    }

    collect_transport_errors(&settings.transport, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate only the per-request transport options.
pub fn validate_transport(transport: &TransportSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    collect_transport_errors(transport, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_transport_errors(transport: &TransportSettings, errors: &mut Vec<ValidationError>) {
    if transport.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "transport.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    if HeaderValue::from_str(&transport.user_agent).is_err() {
        errors.push(ValidationError::new(
            "transport.user_agent",
            "not a valid header value",
        ));
    }

    for (name, value) in &transport.headers {
        let field = format!("transport.headers.{}", name);
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::new(field.clone(), "not a valid header name"));
        }
        if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::new(field, "not a valid header value"));
        }
    }
}
