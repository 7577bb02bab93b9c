//! HTTP API Client
//!
//! Functions for communicating with the CrisisTruth REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crisistruth::endpoints::{self, endpoint_url, normalize_base};
use crisistruth::{ApiError, DashboardSnapshot, FakeNewsItem, RealNewsItem, VerifyRequest, VerifyResponse};

/// Local storage key for a user-chosen backend
const API_URL_KEY: &str = "crisistruth_api_url";

/// Get the API base URL: local storage, then the build environment, then localhost
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    resolve_api_base(stored, option_env!("CRISISTRUTH_API_URL"))
}

fn resolve_api_base(stored: Option<String>, build_time: Option<&str>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .or_else(|| build_time.map(str::to_string))
        .unwrap_or_default();
    normalize_base(&url)
}

pub fn api_url(path: &str) -> String {
    endpoint_url(&get_api_base(), path)
}

// ============ API Functions ============

/// GET `url` and decode its JSON body
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_dashboard() -> Result<DashboardSnapshot, ApiError> {
    fetch_json(&api_url(endpoints::DASHBOARD_STATS)).await
}

pub async fn fetch_fake_news() -> Result<Vec<FakeNewsItem>, ApiError> {
    fetch_json(&api_url(endpoints::FAKE_NEWS)).await
}

pub async fn fetch_real_news() -> Result<Vec<RealNewsItem>, ApiError> {
    fetch_json(&api_url(endpoints::REAL_NEWS)).await
}

/// POST a claim to `/verify`
pub async fn verify_claim(claim: String) -> Result<VerifyResponse, ApiError> {
    let response = Request::post(&api_url(endpoints::VERIFY))
        .json(&VerifyRequest::new(claim))
        .map_err(|e| ApiError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crisistruth::endpoints::DEFAULT_API_BASE;

    #[test]
    fn test_stored_url_wins() {
        let base = resolve_api_base(Some("https://api.example/".into()), Some("http://build:8000"));
        assert_eq!(base, "https://api.example");
    }

    #[test]
    fn test_build_time_then_default() {
        assert_eq!(resolve_api_base(None, Some("http://build:8000")), "http://build:8000");
        assert_eq!(resolve_api_base(Some("  ".into()), None), DEFAULT_API_BASE);
    }
}
