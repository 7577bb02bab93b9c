//! Client Error Types

use thiserror::Error;

/// Message surfaced for any non-success HTTP status
pub const FETCH_FAILED: &str = "Failed to fetch data";

/// Errors talking to the CrisisTruth backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("{}", FETCH_FAILED)]
    Status { status: u16 },

    /// Transport failure (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Body was not the JSON we expected
    #[error("Parse error: {0}")]
    Decode(String),

    /// The request could not be built (bad URL, client setup)
    #[error("Request build error: {0}")]
    Build(String),
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::Build(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_generic_message() {
        let err = ApiError::Status { status: 503 };
        assert_eq!(err.to_string(), "Failed to fetch data");
    }

    #[test]
    fn test_network_keeps_its_own_text() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
