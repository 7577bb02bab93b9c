//! Chart Aggregates
//!
//! Numbers behind the bar and line chart widgets. Rendering is left to the
//! front end.

use serde::{Deserialize, Serialize};

/// One category of a bar chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarDatum {
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub fake: f64,
    #[serde(default)]
    pub real: f64,
}

impl BarDatum {
    pub fn single(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            ..Default::default()
        }
    }

    pub fn comparison(name: impl Into<String>, fake: f64, real: f64) -> Self {
        Self {
            name: name.into(),
            fake,
            real,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarVariant {
    #[default]
    Single,
    /// Fake and real side by side
    Comparison,
}

/// Header figures of a bar chart
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarSummary {
    pub total: f64,
    pub total_fake: f64,
    pub total_real: f64,
    /// Largest plotted value, the 100% mark for bar heights
    pub max: f64,
    /// Mean of `value` over the series
    pub average: f64,
}

pub fn summarize(data: &[BarDatum], variant: BarVariant) -> BarSummary {
    if data.is_empty() {
        return BarSummary::default();
    }

    let total: f64 = data.iter().map(|d| d.value).sum();
    let total_fake: f64 = data.iter().map(|d| d.fake).sum();
    let total_real: f64 = data.iter().map(|d| d.real).sum();

    let max = data
        .iter()
        .map(|d| match variant {
            BarVariant::Single => d.value,
            BarVariant::Comparison => d.fake.max(d.real),
        })
        .fold(0.0_f64, f64::max);

    BarSummary {
        total,
        total_fake,
        total_real,
        max,
        average: total / data.len() as f64,
    }
}

/// Height of `value` as a fraction of `max`, in `[0, 1]`
pub fn bar_fraction(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// One x position of the fake / real line chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePoint {
    pub name: String,
    pub fake: f64,
    pub real: f64,
}

/// Upper bound of the y axis across both series
pub fn line_max(points: &[LinePoint]) -> f64 {
    points
        .iter()
        .map(|p| p.fake.max(p.real))
        .fold(0.0_f64, f64::max)
}

/// Project both series into a `width` x `height` plot, y growing downwards.
///
/// Returns `(fake, real)` polylines.
pub fn line_paths(points: &[LinePoint], width: f64, height: f64) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let max = line_max(points);
    let step = if points.len() > 1 {
        width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let project = |i: usize, v: f64| (i as f64 * step, height - bar_fraction(v, max) * height);

    let fake = points.iter().enumerate().map(|(i, p)| project(i, p.fake)).collect();
    let real = points.iter().enumerate().map(|(i, p)| project(i, p.real)).collect();
    (fake, real)
}
