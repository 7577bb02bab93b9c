//! State Management
//!
//! Shell state shared across pages, and the hooks that bind the core
//! primitives (debounce, fetch guard, snapshots) to signals and timers.

pub mod global;
pub mod hooks;

pub use global::{provide_shell_state, use_shell};
pub use hooks::{use_debounce, use_fetch, use_scroll_offset, use_snapshot};
