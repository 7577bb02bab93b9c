//! Backend API
//!
//! HTTP calls to the CrisisTruth backend via `gloo-net`.

pub mod client;

pub use client::*;
