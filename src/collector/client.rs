//! Coordinator HTTP client
//!
//! Pooled async HTTP client with an explicit request timeout so a slow
//! coordinator cannot stretch a poll cycle indefinitely.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::{debug, instrument};

use super::parser::{parse_payload, MbeanPayload};
use crate::error::CollectorError;
use crate::registry::Registry;

/// HTTP client for the coordinator's mbean endpoints.
#[derive(Clone)]
pub struct JmxClient {
    client: Client,
    base_url: String,
}

impl JmxClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Coordinator origin (e.g. "http://coordinator:8080")
    /// * `timeout_ms` - Per-request timeout (milliseconds)
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, CollectorError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_millis(timeout_ms))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(CollectorError::ClientInit)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch and decode one category's mbean payload.
    ///
    /// The body is read to completion on every response, whatever the HTTP
    /// status, which both returns the connection to the pool and lets an
    /// error body surface as a decode diagnostic instead of being dropped.
    #[instrument(skip(self, registry))]
    pub async fn fetch(
        &self,
        registry: &Registry,
        category: &str,
    ) -> Result<MbeanPayload, CollectorError> {
        let uri = registry.resolve_uri(&self.base_url, category)?;
        debug!(%uri, "Fetching mbean");

        let response = self
            .client
            .get(&uri)
            .send()
            .await
            .map_err(CollectorError::Transport)?;

        let body = response.text().await.map_err(CollectorError::Transport)?;

        parse_payload(&body)
    }
}
