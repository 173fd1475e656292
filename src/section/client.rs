//! Config section client.
//!
//! # Responsibilities
//! - Load a named config object from the service
//! - Apply partial updates: merge locally, PATCH, adopt the server's answer
//! - Hold transport settings by copy so callers cannot alias them

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;
use reqwest::Response;
use tokio::sync::Mutex;
use url::Url;

use crate::config::validation::{validate_settings, validate_transport};
use crate::config::{ClientSettings, SettingsError, TransportSettings, UpdatePolicy};
use crate::error::{ConfigError, ConfigResult};
use crate::http::{request::resource_url, response, Transport};
use crate::observability::metrics;
use crate::section::merge::shallow_merge;
use crate::JsonObject;

/// Local mirror of one server-held config object.
///
/// Share it with `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct ConfigSection {
    name: String,
    url: Url,
    /// Last server response, plus any optimistic merges since.
    data: ArcSwap<JsonObject>,
    settings: ArcSwap<TransportSettings>,
    policy: UpdatePolicy,
    transport: Transport,
    /// Held for the whole round trip under `UpdatePolicy::Serialized`.
    update_queue: Mutex<()>,
}

impl ConfigSection {
    /// Create a section and load it from the service.
    ///
    /// Fails with `InvalidStatus` unless the load answers 200.
    pub async fn create(name: &str, settings: &ClientSettings) -> ConfigResult<Self> {
        let transport = Transport::new(settings.system_proxy)?;
        Self::create_with_transport(name, settings, transport).await
    }

    /// Like [`ConfigSection::create`], reusing an existing transport.
    ///
    /// Settings are validated before any request is sent.
    pub async fn create_with_transport(
        name: &str,
        settings: &ClientSettings,
        transport: Transport,
    ) -> ConfigResult<Self> {
        validate_settings(settings).map_err(SettingsError::Validation)?;
        let url = resource_url(&settings.base_url, name)?;
        let section = Self {
            name: name.to_string(),
            url,
            data: ArcSwap::from_pointee(JsonObject::new()),
            settings: ArcSwap::from_pointee(settings.transport.clone()),
            policy: settings.update_policy,
            transport,
            update_queue: Mutex::new(()),
        };

        section.load().await?;
        Ok(section)
    }

    /// Fetch the whole object again and replace the local mirror.
    pub async fn load(&self) -> ConfigResult<JsonObject> {
        let start = Instant::now();
        let settings = self.settings.load_full();
        let sent = self.transport.get(&self.url, &settings).await;
        let body = self.finish("load", start, sent).await?;

        tracing::info!(section = %self.name, keys = body.len(), "Config section loaded");
        Ok(body)
    }

    /// Merge `partial` into the mirror, PATCH it, and adopt the response.
    ///
    /// Under `UpdatePolicy::Concurrent` the merge is applied before this
    /// method returns, so it is visible before the future is awaited. Under
    /// `UpdatePolicy::Serialized` it is applied once earlier updates finish.
    ///
    /// A failed request does not roll the merge back; only a later
    /// successful `load` or `update` replaces it.
    ///
    /// The PATCH is only sent once the returned future is polled. Dropping it
    /// unawaited under `Concurrent` leaves the merge in place locally while
    /// the service never sees the change; `load` discards it.
    pub fn update(
        &self,
        partial: JsonObject,
    ) -> impl Future<Output = ConfigResult<JsonObject>> + Send + '_ {
        let queued = self.policy == UpdatePolicy::Serialized;
        if !queued {
            self.apply_optimistic(&partial);
        }

        async move {
            let _turn = if queued {
                let turn = self.update_queue.lock().await;
                self.apply_optimistic(&partial);
                Some(turn)
            } else {
                None
            };

            let start = Instant::now();
            let settings = self.settings.load_full();
            let sent = self.transport.patch(&self.url, &partial, &settings).await;
            let body = self.finish("update", start, sent).await?;

            tracing::info!(
                section = %self.name,
                updated = partial.len(),
                "Config section updated"
            );
            Ok(body)
        }
    }

    /// Snapshot of the current mirror.
    pub fn data(&self) -> Arc<JsonObject> {
        self.data.load_full()
    }

    /// Copy of the transport settings.
    pub fn transport_settings(&self) -> TransportSettings {
        self.settings.load_full().as_ref().clone()
    }

    /// Replace the transport settings with a validated copy of `settings`.
    pub fn set_transport_settings(&self, settings: &TransportSettings) -> ConfigResult<()> {
        validate_transport(settings).map_err(SettingsError::Validation)?;
        self.settings.store(Arc::new(settings.clone()));
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        self.policy
    }

    fn apply_optimistic(&self, partial: &JsonObject) {
        self.data.rcu(|current| {
            let mut next = (**current).clone();
            shallow_merge(&mut next, partial);
            next
        });
    }

    /// Check a response and, on success, make its body the new mirror.
    async fn finish(
        &self,
        op: &'static str,
        start: Instant,
        sent: Result<Response, reqwest::Error>,
    ) -> ConfigResult<JsonObject> {
        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                metrics::record_request(op, None, start);
                tracing::warn!(section = %self.name, op, error = %e, "Config request failed");
                return Err(ConfigError::Transport(e));
            }
        };

        let status = response.status();
        let result = response::expect_object(response).await;
        metrics::record_request(op, response::outcome_status(status, &result), start);

        match result {
            Ok(body) => {
                self.data.store(Arc::new(body.clone()));
                Ok(body)
            }
            Err(e) => {
                tracing::warn!(section = %self.name, op, error = %e, "Config request rejected");
                Err(e)
            }
        }
    }
}
