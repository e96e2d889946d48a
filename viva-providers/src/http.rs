//! Live tips over HTTP.
//!
//! A single unauthenticated GET of the tips list resource. Connection
//! errors, non-2xx statuses and unparseable bodies all surface as
//! [`VivaError::TipsFetch`].

use std::time::Duration;

use tracing::debug;
use viva_core::{TipSource, TipsPayload, VivaError};

use crate::network::NetworkConfig;

/// Fetches tips from the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpTipSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTipSource {
    pub fn new(config: &NetworkConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("viva/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTipSource {
    fn default() -> Self {
        Self::new(&NetworkConfig::default())
    }
}

#[async_trait::async_trait]
impl TipSource for HttpTipSource {
    async fn fetch_tips(&self) -> Result<TipsPayload, VivaError> {
        debug!(endpoint = %self.endpoint, "GET tips");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| VivaError::fetch(format!("Tips API error: {}", e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| VivaError::fetch(format!("Tips API returned an error status: {}", e)))?;

        response
            .json::<TipsPayload>()
            .await
            .map_err(|e| VivaError::fetch(format!("Failed to parse tips response: {}", e)))
    }

    fn name(&self) -> &str {
        "http"
    }
}
