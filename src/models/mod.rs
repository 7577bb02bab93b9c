//! Wire Models
//!
//! Request and response bodies of the CrisisTruth backend. Field names
//! follow the backend's JSON (camelCase for the news feeds and dashboard,
//! snake_case inside `/verify` scores).

mod dashboard;
mod news;
mod verify;

pub use dashboard::{CategorySlice, DashboardSnapshot, StatsSummary, TrendingFake, TrendingReal};
pub use news::{FakeNewsItem, RealNewsItem};
pub use verify::{VerifyRequest, VerifyResponse, VerifyScores};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
