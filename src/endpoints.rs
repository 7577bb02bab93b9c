//! Backend Endpoints
//!
//! Paths of the CrisisTruth backend and URL assembly.

/// Backend used when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const DASHBOARD_STATS: &str = "/dashboard-stats";
pub const FAKE_NEWS: &str = "/fake-news";
pub const REAL_NEWS: &str = "/real-news";
pub const VERIFY: &str = "/verify";

/// Strip surrounding whitespace and trailing slashes from a base URL.
///
/// An empty value falls back to [`DEFAULT_API_BASE`].
pub fn normalize_base(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join a base URL and an endpoint path
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://localhost:8000/", FAKE_NEWS),
            "http://localhost:8000/fake-news"
        );
        assert_eq!(endpoint_url("  ", VERIFY), "http://localhost:8000/verify");
    }
}
