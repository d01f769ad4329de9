//! Webhook delivery of message payloads.

use crate::error::{NotifyError, Result};
use crate::message::MessagePayload;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Delivers a formatted message payload to a webhook endpoint.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Post the payload to the given webhook URL.
    async fn deliver(&self, url: &str, payload: &MessagePayload) -> Result<()>;
}

/// HTTP webhook sink.
///
/// Posts the JSON payload with `Content-Type: application/json`. The
/// response is logged but never interpreted; a non-success status is
/// reported as a delivery error.
pub struct WebhookSink {
    client: Client,
}

impl WebhookSink {
    /// Create a sink with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::DeliveryError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MessageSink for WebhookSink {
    async fn deliver(&self, url: &str, payload: &MessagePayload) -> Result<()> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotifyError::DeliveryError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(%status, %body, "webhook response");

        if !status.is_success() {
            return Err(NotifyError::DeliveryError(format!(
                "webhook responded with status {}: {}",
                status, body
            )));
        }
        Ok(())
    }
}
