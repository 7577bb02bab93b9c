//! Dashboard
//!
//! Display derivations for the `/dashboard-stats` snapshot: the three stat
//! cards, the threat indicator and the topic bars.

use crate::charts::LinePoint;
use crate::fetch::Snapshot;
use crate::models::{CategorySlice, DashboardSnapshot, StatsSummary};
use crate::text::format_count;

/// Plot height of the topic bars, in px
pub const TOPIC_CHART_HEIGHT: f64 = 200.0;

/// One headline counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub value: u64,
}

impl StatCard {
    /// Counter with thousands separators
    pub fn display_value(&self) -> String {
        format_count(self.value)
    }
}

/// Cards in display order: scanned, deceptions, verified
pub fn stat_cards(stats: &StatsSummary) -> [StatCard; 3] {
    [
        StatCard {
            label: "Scanned Nodes",
            icon: "🌐",
            color: "#3b82f6",
            value: stats.total_scraped,
        },
        StatCard {
            label: "Deceptions",
            icon: "🚨",
            color: "#ef4444",
            value: stats.fake_detected,
        },
        StatCard {
            label: "Verified Real",
            icon: "✅",
            color: "#10b981",
            value: stats.real_verified,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatTone {
    Alert,
    Calm,
}

impl ThreatTone {
    /// Only the exact backend value `"High"` raises the alert
    pub fn from_level(level: &str) -> Self {
        if level == "High" {
            ThreatTone::Alert
        } else {
            ThreatTone::Calm
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ThreatTone::Alert => "#ef4444",
            ThreatTone::Calm => "#10b981",
        }
    }
}

/// Indicator text, e.g. `"● HIGH"`
pub fn threat_badge(level: &str) -> String {
    format!("● {}", level.to_uppercase())
}

/// Topic values are percentages; 100 fills the plot. Out-of-range values
/// are clamped to the plot, non-numbers render as empty.
pub fn topic_bar_height(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value / 100.0 * TOPIC_CHART_HEIGHT).clamp(0.0, TOPIC_CHART_HEIGHT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicBar {
    pub name: String,
    pub height_px: f64,
}

pub fn topic_bars(distribution: &[CategorySlice]) -> Vec<TopicBar> {
    distribution
        .iter()
        .map(|slice| TopicBar {
            name: slice.name.clone(),
            height_px: topic_bar_height(slice.value),
        })
        .collect()
}

/// Dashboard page state
pub type DashboardView = Snapshot<DashboardSnapshot>;

/// Polled snapshots kept for the live trend line
pub const TREND_WINDOW: usize = 20;

/// Append one poll result to the trend, dropping the oldest past the window
pub fn push_trend(trend: &mut Vec<LinePoint>, label: impl Into<String>, stats: &StatsSummary) {
    trend.push(LinePoint {
        name: label.into(),
        fake: stats.fake_detected as f64,
        real: stats.real_verified as f64,
    });
    if trend.len() > TREND_WINDOW {
        let excess = trend.len() - TREND_WINDOW;
        trend.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn sample() -> DashboardSnapshot {
        serde_json::from_value(serde_json::json!({
            "stats": {"totalScraped": 120, "fakeDetected": 40, "realVerified": 80, "threatLevel": "High"},
            "categoryDistribution": [{"name": "Health", "value": 50}, {"name": "Legal", "value": 12.5}]
        }))
        .unwrap()
    }

    #[test]
    fn test_cards_render_counts_verbatim() {
        let snapshot = sample();
        let cards = stat_cards(&snapshot.stats);

        let rendered: Vec<(&str, String)> = cards
            .iter()
            .map(|card| (card.label, card.display_value()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Scanned Nodes", "120".to_string()),
                ("Deceptions", "40".to_string()),
                ("Verified Real", "80".to_string()),
            ]
        );
    }

    #[test]
    fn test_loading_until_resolved() {
        let mut view = DashboardView::new();
        assert!(view.is_loading());
        assert!(view.shows_placeholder());

        view.settle::<ApiError>(Ok(sample()));
        assert!(!view.is_loading());
        let stats = &view.payload().unwrap().stats;
        assert_eq!(stats.total_scraped, 120);
    }

    #[test]
    fn test_large_counts_are_grouped() {
        let card = StatCard {
            label: "Scanned Nodes",
            icon: "🌐",
            color: "#3b82f6",
            value: 1_204_331,
        };
        assert_eq!(card.display_value(), "1,204,331");
    }

    #[test]
    fn test_threat_tone() {
        assert_eq!(ThreatTone::from_level("High"), ThreatTone::Alert);
        assert_eq!(ThreatTone::from_level("high"), ThreatTone::Calm);
        assert_eq!(ThreatTone::from_level("Low"), ThreatTone::Calm);
        assert_eq!(threat_badge("High"), "● HIGH");
    }

    #[test]
    fn test_trend_window() {
        let stats = sample().stats;
        let mut trend = Vec::new();
        for i in 0..TREND_WINDOW + 5 {
            push_trend(&mut trend, format!("t{}", i), &stats);
        }

        assert_eq!(trend.len(), TREND_WINDOW);
        assert_eq!(trend[0].name, "t5");
        assert_eq!(trend[0].fake, 40.0);
        assert_eq!(trend[0].real, 80.0);
    }

    #[test]
    fn test_topic_bars() {
        let bars = topic_bars(&sample().category_distribution);
        assert_eq!(bars[0].height_px, 100.0);
        assert_eq!(bars[1].height_px, 25.0);
        assert_eq!(topic_bar_height(100.0), TOPIC_CHART_HEIGHT);
    }

    #[test]
    fn test_topic_bars_stay_inside_plot() {
        let slice = |name: &str, value: f64| CategorySlice {
            name: name.to_string(),
            value,
        };
        let distribution = vec![
            slice("Health", 1e19),
            slice("Legal", -40.0),
            slice("Science", f64::INFINITY),
        ];

        let heights: Vec<f64> = topic_bars(&distribution).iter().map(|b| b.height_px).collect();
        assert_eq!(heights, vec![TOPIC_CHART_HEIGHT, 0.0, TOPIC_CHART_HEIGHT]);
        assert_eq!(topic_bar_height(f64::NAN), 0.0);
    }
}
