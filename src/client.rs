//! Backend REST Client
//!
//! HTTP client for the CrisisTruth backend. One GET per list or dashboard,
//! one POST per verification; no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::endpoints::{self, endpoint_url, normalize_base};
use crate::error::ApiError;
use crate::models::{DashboardSnapshot, FakeNewsItem, RealNewsItem, VerifyRequest, VerifyResponse};

/// Something that can verify a claim
///
/// The chat flow talks to this rather than to [`ApiClient`] directly so it
/// can be driven by a stub.
#[async_trait]
pub trait VerificationBackend: Send + Sync {
    async fn verify(&self, claim: &str) -> Result<VerifyResponse, ApiError>;
}

/// CrisisTruth backend client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path` on this backend
    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    /// GET `url` and decode its JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} returned {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardSnapshot, ApiError> {
        self.get_json(&self.url(endpoints::DASHBOARD_STATS)).await
    }

    pub async fn fake_news(&self) -> Result<Vec<FakeNewsItem>, ApiError> {
        self.get_json(&self.url(endpoints::FAKE_NEWS)).await
    }

    pub async fn real_news(&self) -> Result<Vec<RealNewsItem>, ApiError> {
        self.get_json(&self.url(endpoints::REAL_NEWS)).await
    }

    /// POST the claim to `/verify`
    pub async fn verify_claim(&self, claim: &str) -> Result<VerifyResponse, ApiError> {
        let url = self.url(endpoints::VERIFY);
        tracing::info!("Verifying claim ({} chars)", claim.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&VerifyRequest::new(claim))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<VerifyResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl VerificationBackend for ApiClient {
    async fn verify(&self, claim: &str) -> Result<VerifyResponse, ApiError> {
        self.verify_claim(claim).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
        assert_eq!(client.url(endpoints::VERIFY), "http://127.0.0.1:9000/verify");
    }

    #[test]
    fn test_empty_base_falls_back() {
        let config = ApiConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), endpoints::DEFAULT_API_BASE);
    }
}
