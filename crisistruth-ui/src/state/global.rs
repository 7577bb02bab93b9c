//! Global Application State
//!
//! The navigation shell is the only state shared between pages; each page
//! owns its own data.

use leptos::*;

use crisistruth::ShellState;

/// Provide the shell state to the component tree
pub fn provide_shell_state() {
    let path = window().location().pathname().unwrap_or_else(|_| "/".to_string());
    provide_context(create_rw_signal(ShellState::new(path)));
}

pub fn use_shell() -> RwSignal<ShellState> {
    expect_context::<RwSignal<ShellState>>()
}
