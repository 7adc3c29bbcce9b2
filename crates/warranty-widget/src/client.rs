//! HTTP client for the warranty backend.

use crate::error::WidgetError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use warranty_core::{CustomerRegistration, WarrantyCode};

/// Backend operations the registration flow depends on.
///
/// The flow is written against this seam so tests can script responses
/// without a server.
#[async_trait]
pub trait WarrantyBackend: Send + Sync {
    /// Check a 16-character code against the verification endpoint.
    async fn verify_code(&self, code: &WarrantyCode) -> Result<(), WidgetError>;

    /// Submit the assembled registration payload.
    async fn register(&self, registration: &CustomerRegistration) -> Result<(), WidgetError>;

    /// Fetch the product model suggestion list, in backend order.
    async fn fetch_models(&self) -> Result<Vec<String>, WidgetError>;
}

/// Response envelope shared by the warranty endpoints.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Vec<String>>,
}

impl Envelope {
    fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Rejection carrying the server message, or `fallback` when the
    /// backend sent none.
    fn rejection(self, fallback: &str) -> WidgetError {
        WidgetError::Rejected(self.message.unwrap_or_else(|| fallback.to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    warranty_code: &'a str,
}

/// reqwest-backed warranty backend client.
#[derive(Clone)]
pub struct HttpWarrantyClient {
    client: Client,
    base_url: String,
}

impl HttpWarrantyClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, WidgetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl WarrantyBackend for HttpWarrantyClient {
    #[instrument(skip(self, code))]
    async fn verify_code(&self, code: &WarrantyCode) -> Result<(), WidgetError> {
        debug!("sending code verification request");

        let envelope: Envelope = self
            .client
            .post(format!("{}/api/warranty/verify", self.base_url))
            .json(&VerifyRequest {
                warranty_code: code.as_str(),
            })
            .send()
            .await?
            .json()
            .await?;

        if envelope.is_success() {
            Ok(())
        } else {
            warn!(message = ?envelope.message, "code verification rejected");
            Err(envelope.rejection("The code is not valid."))
        }
    }

    #[instrument(skip(self, registration))]
    async fn register(&self, registration: &CustomerRegistration) -> Result<(), WidgetError> {
        debug!("sending registration request");

        let envelope: Envelope = self
            .client
            .post(format!("{}/api/warranty/register", self.base_url))
            .json(registration)
            .send()
            .await?
            .json()
            .await?;

        if envelope.is_success() {
            Ok(())
        } else {
            warn!(message = ?envelope.message, "registration rejected");
            Err(envelope.rejection("An error occurred during registration."))
        }
    }

    #[instrument(skip(self))]
    async fn fetch_models(&self) -> Result<Vec<String>, WidgetError> {
        debug!("fetching model list");

        let envelope: Envelope = self
            .client
            .get(format!("{}/api/models", self.base_url))
            .send()
            .await?
            .json()
            .await?;

        if envelope.is_success() {
            Ok(envelope.data.unwrap_or_default())
        } else {
            Err(envelope.rejection("Could not load the model list."))
        }
    }
}
