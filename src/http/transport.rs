//! HTTP transport for the config service.
//!
//! # Responsibilities
//! - Own the pooled `reqwest` client
//! - Apply transport settings (timeout, user agent, extra headers) per request
//! - Tag every request with a request ID for log correlation
//!
//! Settings are passed into each call rather than stored here, so a section
//! can swap them between requests without rebuilding the client.

use reqwest::header::{CACHE_CONTROL, PRAGMA, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use url::Url;

use crate::config::TransportSettings;
use crate::error::ConfigResult;
use crate::http::request::{new_request_id, X_REQUEST_ID};
use crate::JsonObject;

/// Thin wrapper around a pooled HTTP client.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
}

impl Transport {
    /// Build a transport. With `system_proxy` off, proxy env vars are ignored.
    pub fn new(system_proxy: bool) -> ConfigResult<Self> {
        let mut builder = Client::builder();
        if !system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing client (shares its connection pool).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// GET with caching disabled.
    pub async fn get(&self, url: &Url, settings: &TransportSettings) -> Result<Response, reqwest::Error> {
        self.request(Method::GET, url, settings)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
    }

    /// PATCH with a JSON body (`Content-Type: application/json`).
    pub async fn patch(
        &self,
        url: &Url,
        body: &JsonObject,
        settings: &TransportSettings,
    ) -> Result<Response, reqwest::Error> {
        self.request(Method::PATCH, url, settings)
            .json(body)
            .send()
            .await
    }

    fn request(&self, method: Method, url: &Url, settings: &TransportSettings) -> RequestBuilder {
        let request_id = new_request_id();
        tracing::debug!(
            method = %method,
            url = %url,
            request_id = %request_id,
            "Sending config request"
        );

        let mut builder = self
            .client
            .request(method, url.clone())
            .timeout(settings.request_timeout())
            .header(USER_AGENT, settings.user_agent.as_str())
            .header(X_REQUEST_ID, request_id);

        for (name, value) in &settings.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }
}
