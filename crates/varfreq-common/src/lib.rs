//! varfreq-common — Shared errors and the sandboxed HTTP client used across all varfreq crates.

pub mod error;
pub mod sandbox;
