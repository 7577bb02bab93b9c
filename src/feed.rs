//! News Feeds
//!
//! Client-side filtering and display state for the flagged (`/fake-news`)
//! and verified (`/real-news`) lists. Filters are plain view predicates: the
//! fetched collection is never modified, only narrowed at render time.

use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use crate::charts::BarDatum;
use crate::fetch::Snapshot;
use crate::models::{FakeNewsItem, RealNewsItem};
use crate::text::{normalize_text, truncate_text};

/// Category filter buttons, in display order
pub const CATEGORIES: [&str; 7] = [
    "all",
    "Health",
    "Finance",
    "Environment",
    "Science",
    "Technology",
    "Legal",
];

/// Evidence shown before "Read More"
pub const EVIDENCE_PREVIEW_CHARS: usize = 150;

/// Fields the filters look at
pub trait FeedItem {
    fn id(&self) -> u64;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;

    /// Impact level, for feeds that have one
    fn impact_level(&self) -> Option<&str> {
        None
    }
}

impl FeedItem for FakeNewsItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl FeedItem for RealNewsItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn impact_level(&self) -> Option<&str> {
        Some(&self.impact_level)
    }
}

// ============ Filters ============

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` selects everything; anything else is an exact category name
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(name) => name,
        }
    }

    /// Strict, case-sensitive equality
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactLevel {
    Critical,
    High,
    Medium,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 3] = [ImpactLevel::Critical, ImpactLevel::High, ImpactLevel::Medium];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Critical => "critical",
            ImpactLevel::High => "high",
            ImpactLevel::Medium => "medium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Critical => "Critical Impact",
            ImpactLevel::High => "High Impact",
            ImpactLevel::Medium => "Medium Impact",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ImpactLevel::Critical => "#7c3aed",
            ImpactLevel::High => "#2563eb",
            ImpactLevel::Medium => "#16a34a",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ImpactLevel::Critical => "#f3e8ff",
            ImpactLevel::High => "#dbeafe",
            ImpactLevel::Medium => "#dcfce7",
        }
    }
}

impl FromStr for ImpactLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(ImpactLevel::Critical),
            "high" => Ok(ImpactLevel::High),
            "medium" => Ok(ImpactLevel::Medium),
            other => Err(format!("Unknown impact level: {}", other)),
        }
    }
}

impl Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Neutral color for unknown impact values and the "all" button
pub const NEUTRAL_COLOR: &str = "#64748b";
pub const NEUTRAL_BACKGROUND: &str = "#f1f5f9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpactFilter {
    #[default]
    All,
    Only(ImpactLevel),
}

impl ImpactFilter {
    pub fn parse(value: &str) -> Result<Self, String> {
        if value == "all" {
            Ok(ImpactFilter::All)
        } else {
            value.parse().map(ImpactFilter::Only)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactFilter::All => "all",
            ImpactFilter::Only(level) => level.as_str(),
        }
    }

    pub fn matches(&self, impact: Option<&str>) -> bool {
        match self {
            ImpactFilter::All => true,
            ImpactFilter::Only(level) => impact == Some(level.as_str()),
        }
    }
}

/// Everything that narrows a feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedFilter {
    pub category: CategoryFilter,
    pub impact: ImpactFilter,
    /// Free-text search, already debounced by the caller
    pub query: String,
}

impl FeedFilter {
    pub fn select_category(&mut self, category: CategoryFilter) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    pub fn select_impact(&mut self, impact: ImpactFilter) -> bool {
        if self.impact == impact {
            return false;
        }
        self.impact = impact;
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn matches<I: FeedItem>(&self, item: &I) -> bool {
        if !self.category.matches(item.category()) {
            return false;
        }
        if !self.impact.matches(item.impact_level()) {
            return false;
        }

        let needle = normalize_text(&self.query);
        needle.is_empty()
            || normalize_text(item.title()).contains(&needle)
            || normalize_text(item.description()).contains(&needle)
    }

    /// Items passing the filter, in fetched order
    pub fn apply<'a, I: FeedItem>(&self, items: &'a [I]) -> Vec<&'a I> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

// ============ Display tones ============

/// Border / badge color of a flagged item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTone {
    Critical,
    High,
    Medium,
    Neutral,
}

impl SeverityTone {
    pub fn from_severity(severity: &str) -> Self {
        match severity.to_lowercase().as_str() {
            "critical" => SeverityTone::Critical,
            "high" => SeverityTone::High,
            "medium" => SeverityTone::Medium,
            _ => SeverityTone::Neutral,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SeverityTone::Critical => "#dc2626",
            SeverityTone::High => "#ef4444",
            SeverityTone::Medium => "#f97316",
            SeverityTone::Neutral => NEUTRAL_COLOR,
        }
    }
}

/// Verdict-score meter color of a flagged item (score in `[0, 1]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            ScoreBand::High
        } else if score > 0.4 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::High => "#16a34a",
            ScoreBand::Medium => "#f59e0b",
            ScoreBand::Low => "#dc2626",
        }
    }
}

/// Meter width in percent, clamped to the bar
pub fn score_percent(score: f64) -> f64 {
    (score * 100.0).clamp(0.0, 100.0)
}

/// Impact color, neutral for values outside the known levels
pub fn impact_color(impact: &str) -> &'static str {
    impact
        .parse::<ImpactLevel>()
        .map(|level| level.color())
        .unwrap_or(NEUTRAL_COLOR)
}

pub fn impact_background(impact: &str) -> &'static str {
    impact
        .parse::<ImpactLevel>()
        .map(|level| level.background())
        .unwrap_or(NEUTRAL_BACKGROUND)
}

/// Evidence paragraph of a flagged item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidencePreview {
    pub text: String,
    /// Evidence is long enough to need a Read More / Show Less toggle
    pub has_toggle: bool,
}

pub fn evidence_preview(evidence: &str, expanded: bool) -> EvidencePreview {
    let has_toggle = evidence.chars().count() > EVIDENCE_PREVIEW_CHARS;
    let text = if expanded || !has_toggle {
        evidence.to_string()
    } else {
        truncate_text(evidence, EVIDENCE_PREVIEW_CHARS)
    };
    EvidencePreview { text, has_toggle }
}

/// Number of distinct outlets behind a verified feed
pub fn distinct_sources(items: &[RealNewsItem]) -> usize {
    items
        .iter()
        .map(|item| item.source_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Item count per category, in filter-button order. Empty categories are kept.
pub fn category_histogram<I: FeedItem>(items: &[I]) -> Vec<BarDatum> {
    CATEGORIES
        .iter()
        .filter(|name| **name != "all")
        .map(|name| {
            let count = items.iter().filter(|item| item.category() == *name).count();
            BarDatum::single(*name, count as f64)
        })
        .collect()
}

// ============ View state ============

/// State of one feed page: last good collection, filters, expanded cards
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView<I> {
    snapshot: Snapshot<Vec<I>>,
    filter: FeedFilter,
    expanded: HashSet<u64>,
}

impl<I> Default for FeedView<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> FeedView<I> {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::new(),
            filter: FeedFilter::default(),
            expanded: HashSet::new(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot<Vec<I>> {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading()
    }

    pub fn begin_refresh(&mut self) {
        self.snapshot.begin_refresh();
    }

    /// Replace the collection wholesale, or keep the old one on failure
    pub fn settle<E: Display>(&mut self, result: Result<Vec<I>, E>) -> bool {
        self.snapshot.settle(result)
    }

    /// Everything fetched, unfiltered
    pub fn items(&self) -> &[I] {
        self.snapshot.payload().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn filter(&self) -> &FeedFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FeedFilter {
        &mut self.filter
    }

    pub fn toggle_expanded(&mut self, id: u64) -> bool {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.expanded.contains(&id)
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.contains(&id)
    }
}

impl<I: FeedItem> FeedView<I> {
    /// Items after filtering, in fetched order
    pub fn visible(&self) -> Vec<&I> {
        self.filter.apply(self.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn fake(id: u64, category: &str, title: &str) -> FakeNewsItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "description": "Forwarded message",
            "category": category,
            "severity": "high",
            "verdictScore": 0.3
        }))
        .unwrap()
    }

    fn real(id: u64, category: &str, impact: &str, source: &str) -> RealNewsItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Report {}", id),
            "category": category,
            "impactLevel": impact,
            "sourceName": source
        }))
        .unwrap()
    }

    fn mixed_feed() -> Vec<FakeNewsItem> {
        vec![
            fake(1, "Health", "Garlic cures flu"),
            fake(2, "Finance", "Banks closing Monday"),
            fake(3, "Health", "5G spreads virus"),
            fake(4, "Finance", "New 1000 rupee note"),
        ]
    }

    #[test]
    fn test_category_filter_exact_match() {
        let items = mixed_feed();
        let mut filter = FeedFilter::default();
        filter.select_category(CategoryFilter::parse("Finance"));

        let visible = filter.apply(&items);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|item| item.category == "Finance"));

        filter.select_category(CategoryFilter::parse("finance"));
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn test_all_keeps_collection_unmodified() {
        let items = mixed_feed();
        let filter = FeedFilter::default();

        let visible: Vec<_> = filter.apply(&items).into_iter().cloned().collect();
        assert_eq!(visible, items);
    }

    #[test]
    fn test_reselecting_filter_is_idempotent() {
        let items = mixed_feed();
        let mut filter = FeedFilter::default();
        filter.select_category(CategoryFilter::parse("Health"));
        let before: Vec<u64> = filter.apply(&items).iter().map(|i| i.id).collect();

        assert!(!filter.select_category(CategoryFilter::parse("Health")));
        let after: Vec<u64> = filter.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_impact_and_category_combine() {
        let items = vec![
            real(1, "Health", "critical", "WHO"),
            real(2, "Health", "medium", "ICMR"),
            real(3, "Finance", "critical", "RBI"),
        ];
        let mut filter = FeedFilter::default();
        filter.select_impact(ImpactFilter::parse("critical").unwrap());
        assert_eq!(filter.apply(&items).len(), 2);

        filter.select_category(CategoryFilter::parse("Health"));
        let visible = filter.apply(&items);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_impact_filter_rejects_unknown() {
        assert!(ImpactFilter::parse("severe").is_err());
        assert_eq!(ImpactFilter::parse("all"), Ok(ImpactFilter::All));
    }

    #[test]
    fn test_query_matches_title_or_description() {
        let items = mixed_feed();
        let mut filter = FeedFilter::default();

        filter.set_query("  GARLIC ");
        assert_eq!(filter.apply(&items).len(), 1);

        filter.set_query("forwarded");
        assert_eq!(filter.apply(&items).len(), 4);

        filter.set_query("");
        assert_eq!(filter.apply(&items).len(), 4);
    }

    #[test]
    fn test_severity_and_score_tones() {
        assert_eq!(SeverityTone::from_severity("CRITICAL"), SeverityTone::Critical);
        assert_eq!(SeverityTone::from_severity("low"), SeverityTone::Neutral);
        assert_eq!(ScoreBand::from_score(0.81), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(0.8), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(0.4), ScoreBand::Low);
        assert_eq!(score_percent(1.7), 100.0);
    }

    #[test]
    fn test_impact_colors() {
        assert_eq!(impact_color("critical"), "#7c3aed");
        assert_eq!(impact_color("unknown"), NEUTRAL_COLOR);
        assert_eq!(impact_background("medium"), "#dcfce7");
    }

    #[test]
    fn test_evidence_preview() {
        let long = "a".repeat(200);

        let collapsed = evidence_preview(&long, false);
        assert!(collapsed.has_toggle);
        assert_eq!(collapsed.text.chars().count(), EVIDENCE_PREVIEW_CHARS + 3);

        let expanded = evidence_preview(&long, true);
        assert_eq!(expanded.text, long);

        let short = evidence_preview("PIB fact check: false.", false);
        assert!(!short.has_toggle);
        assert_eq!(short.text, "PIB fact check: false.");
    }

    #[test]
    fn test_distinct_sources() {
        let items = vec![
            real(1, "Health", "high", "WHO"),
            real(2, "Health", "high", "WHO"),
            real(3, "Finance", "high", "RBI"),
        ];
        assert_eq!(distinct_sources(&items), 2);
    }

    #[test]
    fn test_category_histogram() {
        let histogram = category_histogram(&mixed_feed());
        assert_eq!(histogram.len(), CATEGORIES.len() - 1);
        assert_eq!(histogram[0], BarDatum::single("Health", 2.0));
        assert_eq!(histogram[1], BarDatum::single("Finance", 2.0));
        assert_eq!(histogram[5].value, 0.0);
    }

    #[test]
    fn test_feed_view_lifecycle() {
        let mut view: FeedView<FakeNewsItem> = FeedView::new();
        assert!(view.is_loading());
        assert!(view.visible().is_empty());

        view.settle::<ApiError>(Ok(mixed_feed()));
        view.filter_mut().select_category(CategoryFilter::parse("Health"));
        assert_eq!(view.visible().len(), 2);

        view.begin_refresh();
        view.settle(Err(ApiError::Timeout));
        assert_eq!(view.items().len(), 4);

        assert!(view.toggle_expanded(3));
        assert!(view.is_expanded(3));
        assert!(!view.toggle_expanded(3));
    }
}
