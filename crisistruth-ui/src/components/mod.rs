//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod chat;
pub mod filters;
pub mod footer;
pub mod loading;
pub mod nav;
pub mod news_card;
pub mod sidebar;
pub mod stat_card;

pub use chart::{BarChart, LineChart};
pub use chat::{ChatInput, ChatMessage};
pub use filters::{CategoryBar, ImpactBar, RefreshButton, SearchBox};
pub use footer::Footer;
pub use loading::{ListSkeleton, Loading};
pub use nav::{Navbar, ScrollToTop};
pub use news_card::{FakeNewsCard, RealNewsCard};
pub use sidebar::Sidebar;
pub use stat_card::StatCardView;
