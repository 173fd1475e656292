//! Response handling.
//!
//! # Responsibilities
//! - Accept only status 200 from the config service
//! - Decode the body as a JSON object
//!
//! Any other status, including other 2xx codes, is a protocol failure. The body
//! of a rejected response is never decoded.

use reqwest::{Response, StatusCode};

use crate::error::{ConfigError, ConfigResult};
use crate::JsonObject;

/// Check the status and decode a config object from the body.
pub async fn expect_object(response: Response) -> ConfigResult<JsonObject> {
    check_status(response.status())?;
    Ok(response.json::<JsonObject>().await?)
}

/// Map a status code to `Ok` (exactly 200) or `InvalidStatus`.
pub fn check_status(status: StatusCode) -> ConfigResult<()> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ConfigError::InvalidStatus(status.as_u16()))
    }
}

/// Status to record for a finished round trip. A 200 whose body failed to
/// decode counts as an error, not a success.
pub fn outcome_status<T>(status: StatusCode, result: &ConfigResult<T>) -> Option<u16> {
    match result {
        Err(ConfigError::Transport(_)) => None,
        _ => Some(status.as_u16()),
    }
}
