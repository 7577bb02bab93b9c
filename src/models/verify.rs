use serde::{Deserialize, Serialize};

use super::nullable;

/// Body of `POST /verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub claim: String,
}

impl VerifyRequest {
    pub fn new(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
        }
    }
}

/// Response of `POST /verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Markdown explanation shown as the assistant's reply
    #[serde(default, deserialize_with = "nullable")]
    pub reasoning: String,
    /// Verdict label, e.g. "True", "False", "Unverifiable"
    #[serde(default, deserialize_with = "nullable")]
    pub verdict: String,
    #[serde(default)]
    pub scores: Option<VerifyScores>,
    /// Sources consulted, when the backend reports them
    #[serde(default, deserialize_with = "nullable")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyScores {
    #[serde(default, deserialize_with = "nullable")]
    pub trust_score: f64,
}

impl VerifyResponse {
    /// Backend trust score, `0` when the backend omitted it
    pub fn trust_score(&self) -> f64 {
        self.scores.as_ref().map(|s| s.trust_score).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(VerifyRequest::new("Vaccines cause X")).unwrap();
        assert_eq!(body, serde_json::json!({"claim": "Vaccines cause X"}));
    }

    #[test]
    fn test_trust_score_defaults_to_zero() {
        let response: VerifyResponse =
            serde_json::from_str(r#"{"reasoning": "No match", "verdict": "Unverifiable"}"#).unwrap();
        assert_eq!(response.trust_score(), 0.0);

        let response: VerifyResponse = serde_json::from_str(
            r#"{"reasoning": "ok", "verdict": "True", "scores": {"trust_score": 0.97}}"#,
        )
        .unwrap();
        assert_eq!(response.trust_score(), 0.97);
    }
}
