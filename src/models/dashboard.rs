use serde::{Deserialize, Serialize};

use super::nullable;

/// Body of `GET /dashboard-stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: StatsSummary,
    #[serde(default, deserialize_with = "nullable")]
    pub category_distribution: Vec<CategorySlice>,
    #[serde(default, deserialize_with = "nullable")]
    pub trending_fake: Vec<TrendingFake>,
    #[serde(default, deserialize_with = "nullable")]
    pub trending_real: Vec<TrendingReal>,
}

/// Headline counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_scraped: u64,
    pub fake_detected: u64,
    pub real_verified: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub threat_level: String,
}

/// One bar of the topic distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingFake {
    pub id: u64,
    pub title: String,
    /// Percentage, already scaled to `0..=100` by the backend
    #[serde(default, deserialize_with = "nullable")]
    pub fake_score: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingReal {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_backend_json() {
        let json = r#"{
            "stats": {"totalScraped": 120, "fakeDetected": 40, "realVerified": 80, "threatLevel": "High"},
            "categoryDistribution": [{"name": "Health", "value": 45}, {"name": "Finance", "value": 20.5}],
            "trendingFake": [{"id": 1, "title": "Fake cure", "fakeScore": 92, "url": "https://a.example"}],
            "trendingReal": [{"id": 2, "title": "Official notice", "url": "https://b.example"}]
        }"#;

        let snapshot: DashboardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.stats.total_scraped, 120);
        assert_eq!(snapshot.stats.threat_level, "High");
        assert_eq!(snapshot.category_distribution.len(), 2);
        assert_eq!(snapshot.trending_fake[0].fake_score, 92.0);
        assert_eq!(snapshot.trending_real[0].title, "Official notice");
    }

    #[test]
    fn test_snapshot_without_lists() {
        let json = r#"{"stats": {"totalScraped": 0, "fakeDetected": 0, "realVerified": 0}}"#;

        let snapshot: DashboardSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.trending_fake.is_empty());
        assert_eq!(snapshot.stats.threat_level, "");
    }
}
