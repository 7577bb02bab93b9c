//! # CrisisTruth
//!
//! Client core for the CrisisTruth AI misinformation-verification service.
//!
//! The backend does the fact checking; this crate owns everything on the
//! client side of the wire: typed models for the backend endpoints, the
//! request/response state the views are built from, and the small state
//! machines behind them.
//!
//! ## Modules
//!
//! - [`models`]: Wire types for `/dashboard-stats`, `/fake-news`, `/real-news`, `/verify`
//! - [`debounce`]: Latest-value-wins debounce primitive
//! - [`fetch`]: Fetch envelope and the stale-response guard
//! - [`chat`]: Verification chat transcript and its two-state machine
//! - [`markdown`]: HTML rendering of assistant replies
//! - [`feed`]: Flagged / verified feed filtering and display tones
//! - [`dashboard`]: Dashboard stat cards and threat level
//! - [`charts`]: Aggregates for the chart widgets
//! - [`shell`]: Routes, navigation and scroll-derived shell state
//!
//! Everything above compiles for `wasm32` and is shared with the browser
//! front end. The `native` feature (on by default) adds [`client`],
//! [`config`], [`poll`] and the tokio drivers used by the `crisistruth` CLI.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crisistruth::{ApiClient, ChatSession, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let client = ApiClient::new(&config.api)?;
//!
//!     let mut session = ChatSession::new(chrono::Utc::now());
//!     session.set_input("Drinking hot water cures the flu");
//!
//!     if let Some(turn) = session.send(&client).await {
//!         println!("{}", turn.body);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod chat;
pub mod dashboard;
pub mod debounce;
pub mod endpoints;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod markdown;
pub mod models;
pub mod shell;
pub mod text;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod poll;

pub use chat::{ChatSession, ChatState, ChatTurn, Origin, Verdict, VerdictTone};
pub use debounce::{Debounce, Ticket};
pub use error::ApiError;
pub use feed::{CategoryFilter, FeedFilter, FeedItem, FeedView, ImpactFilter, ImpactLevel};
pub use fetch::{FetchState, RequestToken, RequestTracker, Snapshot};
pub use models::{
    CategorySlice, DashboardSnapshot, FakeNewsItem, RealNewsItem, StatsSummary, TrendingFake,
    TrendingReal, VerifyRequest, VerifyResponse, VerifyScores,
};
pub use shell::{Route, ShellState};

#[cfg(feature = "native")]
pub use client::{ApiClient, VerificationBackend};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
#[cfg(feature = "native")]
pub use debounce::Debouncer;
#[cfg(feature = "native")]
pub use fetch::UrlFetcher;
#[cfg(feature = "native")]
pub use poll::Poller;
