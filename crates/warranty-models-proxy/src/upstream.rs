//! Client for the upstream script endpoint.

use crate::error::ProxyError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use urlencoding::encode;

/// HTTP client for the fixed upstream model-list endpoint.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new upstream client.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the model list, tagging the request with the caller origin.
    ///
    /// The JSON body is relayed as-is; whatever status the upstream
    /// reports inside it is the caller's business. Only transport
    /// errors and non-JSON bodies surface as [`ProxyError::Upstream`].
    #[instrument(skip(self))]
    pub async fn fetch_models(&self, origin: &str) -> Result<serde_json::Value, ProxyError> {
        let url = format!(
            "{}?action=models&origin={}",
            self.base_url,
            encode(origin)
        );

        debug!(url = %url, "forwarding model lookup");

        let body = self.client.get(&url).send().await?.json().await?;
        Ok(body)
    }
}
