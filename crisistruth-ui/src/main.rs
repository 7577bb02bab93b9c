//! CrisisTruth AI
//!
//! Misinformation-verification dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live dashboard of scanned, flagged and verified news
//! - Flagged and verified news feeds with category / impact filters
//! - Claim verification chat backed by the CrisisTruth engine
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Models, filters and the chat state machine come from the
//! `crisistruth` crate; this crate wires them to signals, timers and the DOM.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
