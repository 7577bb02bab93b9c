use serde::{Deserialize, Serialize};

use super::nullable;

/// A flagged (debunked) item from `GET /fake-news`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FakeNewsItem {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub source_url: String,
    /// Where the claim circulated (WhatsApp, X, ...)
    #[serde(default, deserialize_with = "nullable")]
    pub platform: String,
    /// Backend verdict label, e.g. "FAKE" or "MISLEADING"
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub severity: String,
    /// Evidence text from the verified corpus that contradicts the claim
    #[serde(default, deserialize_with = "nullable")]
    pub real_evidence: String,
    /// Verdict score in `[0, 1]`
    #[serde(default, deserialize_with = "nullable")]
    pub verdict_score: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub time_detected: String,
}

/// A verified item from `GET /real-news`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealNewsItem {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub source_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub source_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    /// Verification score in `[0, 100]`
    #[serde(default, deserialize_with = "nullable")]
    pub verification_score: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub published_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub verification_methods: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub additional_sources: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub region: String,
    /// `critical`, `high` or `medium`; kept verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub impact_level: String,
}
