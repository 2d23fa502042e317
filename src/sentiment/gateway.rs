// src/sentiment/gateway.rs
// Composition of the transport call and the normalizer: one request in, one
// fully-populated result out, no error propagation to the caller.

use std::sync::Arc;

use tracing::{debug, info};

use super::normalize::normalize;
use super::transport::{HttpTransport, SentimentTransport};
use super::{ClassificationRequest, ClassificationResult, TransportError};
use crate::config::GatewayConfig;

/// Stateless gateway to the external sentiment classification service.
pub struct SentimentGateway {
    transport: Arc<dyn SentimentTransport>,
}

impl SentimentGateway {
    /// Builds a gateway over the real HTTP transport.
    pub fn new(config: &GatewayConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    /// Builds a gateway over an arbitrary transport (tests inject fakes here).
    pub fn with_transport(transport: Arc<dyn SentimentTransport>) -> Self {
        Self { transport }
    }

    /// Classifies one sentence. Suspends until the external API answers or
    /// the call fails; every failure comes back as `label == "ERROR"`.
    pub async fn classify(&self, request: &ClassificationRequest) -> ClassificationResult {
        info!(
            "classifying sentence ({} chars)",
            request.sentence.chars().count()
        );

        let outcome = self.transport.send(request).await;
        if let Ok(body) = &outcome {
            debug!("raw API response: {}", body);
        }

        let result = normalize(outcome);
        info!(
            "classification result: {} ({})",
            result.label, result.confidence
        );
        result
    }
}
