//! Metrics collection.
//!
//! # Metrics
//! - `config_section_requests_total` (counter): round trips by `op`, `status`
//! - `config_section_request_duration_seconds` (histogram): latency by `op`
//!
//! `status` is the HTTP status code, or `error` when no response arrived.

use std::time::Instant;

pub const REQUESTS_TOTAL: &str = "config_section_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "config_section_request_duration_seconds";

/// Record one completed (or failed) round trip.
pub fn record_request(op: &'static str, status: Option<u16>, start: Instant) {
    ::metrics::counter!(REQUESTS_TOTAL, "op" => op, "status" => status_label(status)).increment(1);
    ::metrics::histogram!(REQUEST_DURATION_SECONDS, "op" => op).record(start.elapsed().as_secs_f64());
}

fn status_label(status: Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "error".to_string(),
    }
}
