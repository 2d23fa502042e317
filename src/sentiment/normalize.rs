// src/sentiment/normalize.rs
// Turns the raw outcome of the transport call into the stable result shape.
// Every branch terminates here; nothing is re-raised to the caller.

use serde_json::Value;
use tracing::{debug, error};

use super::{ClassificationResult, RawCandidate, TransportError};

/// Collapses the transport outcome into the one result shape callers see.
pub fn normalize(outcome: Result<String, TransportError>) -> ClassificationResult {
    match outcome {
        Ok(body) => normalize_body(&body),
        Err(e) => {
            error!("sentiment API call failed: {}", e);
            ClassificationResult::error(format!("API call failed: {}", e))
        }
    }
}

fn normalize_body(body: &str) -> ClassificationResult {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            error!("failed to parse sentiment API response: {}", e);
            return ClassificationResult::error(format!("response parse error: {}", e));
        }
    };

    match parsed.as_array() {
        Some(items) if !items.is_empty() => select_best(items),
        _ => ClassificationResult::error("empty or invalid response shape".to_string()),
    }
}

/// Best-label selection: strict greater-than, so the first candidate seen
/// wins all ties. Entries missing either field are skipped, not errors; if
/// nothing qualifies the initial ("UNKNOWN", 0.0) pair stands.
fn select_best(items: &[Value]) -> ClassificationResult {
    let mut best_label = "UNKNOWN".to_string();
    let mut best_prob = 0.0_f64;

    for item in items {
        let Ok(candidate) = serde_json::from_value::<RawCandidate>(item.clone()) else {
            continue;
        };
        let (Some(template), Some(prob)) = (candidate.template, candidate.prob) else {
            continue;
        };

        if prob > best_prob {
            best_prob = prob;
            best_label = template;
        }
    }

    debug!("best candidate: {} ({:.4})", best_label, best_prob);

    let message = format!(
        "sentiment classification complete - {} ({:.2}%)",
        best_label,
        best_prob * 100.0
    );

    ClassificationResult {
        label: best_label,
        confidence: format!("{:.4}", best_prob),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_ok(body: &str) -> ClassificationResult {
        normalize(Ok(body.to_string()))
    }

    #[test]
    fn test_picks_highest_probability_candidate() {
        let result =
            normalize_ok(r#"[{"template":"POSITIVE","prob":0.9},{"template":"NEGATIVE","prob":0.3}]"#);

        assert_eq!(result.label, "POSITIVE");
        assert_eq!(result.confidence, "0.9000");
        assert!(result.message.contains("POSITIVE"));
        assert!(result.message.contains("90.00%"));
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        let result = normalize_ok(r#"[{"template":"A","prob":0.5},{"template":"B","prob":0.5}]"#);

        assert_eq!(result.label, "A");
        assert_eq!(result.confidence, "0.5000");
    }

    #[test]
    fn test_candidates_missing_fields_are_skipped() {
        let result = normalize_ok(
            r#"[{"template":"NO_SCORE"},{"prob":0.99},{"template":"POSITIVE","prob":0.4}]"#,
        );

        assert_eq!(result.label, "POSITIVE");
        assert_eq!(result.confidence, "0.4000");
    }

    #[test]
    fn test_no_usable_candidates_yields_unknown() {
        let result = normalize_ok(r#"[{"template":"NO_SCORE"},{"prob":0.99}]"#);

        assert_eq!(result.label, "UNKNOWN");
        assert_eq!(result.confidence, "0.0000");
        assert!(result.message.contains("UNKNOWN"));
        assert!(result.message.contains("0.00%"));
    }

    #[test]
    fn test_confidence_keeps_four_fixed_digits() {
        let result = normalize_ok(r#"[{"template":"POSITIVE","prob":0.87314159}]"#);

        assert_eq!(result.confidence, "0.8731");
        assert!(result.message.contains("87.31%"));
    }

    #[test]
    fn test_empty_array_is_an_error() {
        let result = normalize_ok("[]");

        assert_eq!(result.label, "ERROR");
        assert_eq!(result.confidence, "0.0");
        assert_eq!(result.message, "empty or invalid response shape");
    }

    #[test]
    fn test_non_array_body_is_an_error() {
        let result = normalize_ok(r#"{"template":"POSITIVE","prob":0.9}"#);

        assert_eq!(result.label, "ERROR");
        assert_eq!(result.message, "empty or invalid response shape");
    }

    #[test]
    fn test_unparseable_body_is_an_error() {
        let result = normalize_ok("not json");

        assert_eq!(result.label, "ERROR");
        assert_eq!(result.confidence, "0.0");
        assert!(result.message.contains("parse"));
    }

    #[test]
    fn test_transport_status_error_carries_status_and_body() {
        let outcome = Err(TransportError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        });
        let result = normalize(outcome);

        assert_eq!(result.label, "ERROR");
        assert_eq!(result.confidence, "0.0");
        assert!(result.message.contains("500"));
        assert!(result.message.contains("boom"));
    }
}
