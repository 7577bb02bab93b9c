//! Pages
//!
//! One component per route.

pub mod chatbot;
pub mod dashboard;
pub mod fake_news;
pub mod real_news;

pub use chatbot::Chatbot;
pub use dashboard::Dashboard;
pub use fake_news::FakeNews;
pub use real_news::RealNews;
