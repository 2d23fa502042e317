// src/sentiment/transport.rs
// The single outbound HTTP call to the classification service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::debug;

use super::{ClassificationRequest, TransportError};
use crate::config::GatewayConfig;

/// Seam between the gateway and the network so tests can inject fakes.
#[async_trait]
pub trait SentimentTransport: Send + Sync {
    /// Sends one classification request and returns the raw response body.
    /// Exactly one outbound call per invocation; no retries.
    async fn send(&self, request: &ClassificationRequest) -> Result<String, TransportError>;
}

/// reqwest-backed transport. One client per transport, timeout from config.
pub struct HttpTransport {
    client: Client,
    url: String,
    token: String,
}

impl HttpTransport {
    pub fn new(config: &GatewayConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            url: config.classification_url(),
            token: config.api_token.clone(),
        })
    }
}

#[async_trait]
impl SentimentTransport for HttpTransport {
    async fn send(&self, request: &ClassificationRequest) -> Result<String, TransportError> {
        debug!(
            "POST {} ({} chars)",
            self.url,
            request.sentence.chars().count()
        );

        let response = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(TransportError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}
