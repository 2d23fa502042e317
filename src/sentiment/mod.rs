// src/sentiment/mod.rs
// Types and error taxonomy for the sentiment classification gateway.

pub mod gateway;
pub mod normalize;
pub mod transport;

use serde::{Deserialize, Serialize};

/// Upper bound on sentence length, matching the external API's limit.
pub const MAX_SENTENCE_CHARS: usize = 1000;

/// Request accepted by the gateway. Built through `new` so the non-blank and
/// length bounds are enforced before any network call happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub sentence: String,
}

impl ClassificationRequest {
    pub fn new(sentence: impl Into<String>) -> Result<Self, ValidationError> {
        let sentence = sentence.into();

        if sentence.trim().is_empty() {
            return Err(ValidationError::BlankSentence);
        }

        let chars = sentence.chars().count();
        if chars > MAX_SENTENCE_CHARS {
            return Err(ValidationError::SentenceTooLong(chars));
        }

        Ok(Self { sentence })
    }
}

/// The only value any caller ever sees. All three fields are always
/// populated; failures surface as `label == "ERROR"`, never as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Category name, or the literal markers `"UNKNOWN"` / `"ERROR"`.
    pub label: String,
    /// Winning score with 4 fractional digits, or `"0.0"` on error paths.
    pub confidence: String,
    /// Human-readable description of what happened, suitable for display.
    pub message: String,
}

impl ClassificationResult {
    pub(crate) fn error(message: String) -> Self {
        Self {
            label: "ERROR".to_string(),
            confidence: "0.0".to_string(),
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.label == "ERROR"
    }
}

/// One entry of the external API's response array. The upstream service is
/// not consistent about which fields appear, so both are optional and
/// presence is checked during best-label selection.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandidate {
    pub template: Option<String>,
    pub prob: Option<f64>,
}

/// Rejected before the gateway is invoked; never reaches the network.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("sentence must not be blank")]
    BlankSentence,

    #[error("sentence is {0} characters, over the limit of {limit}", limit = MAX_SENTENCE_CHARS)]
    SentenceTooLong(usize),
}

/// Failure of the one outbound HTTP call.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("sentiment API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("sentiment API request failed: {0}")]
    Request(#[from] reqwest::Error),
}
