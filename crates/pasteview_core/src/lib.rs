//! Core domain library for PasteView (config, API client, fetch lifecycle).

/// HTTP client for the paste retrieval endpoint.
pub mod client;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants (defaults, user-facing messages).
pub mod constants;
/// Scoped environment overrides for config tests.
pub mod env;
/// Error types for fetch and clipboard paths.
pub mod error;
/// Fetch-lifecycle state machine with request generations.
pub mod fetch;
/// Data models returned by the API.
pub mod models;
/// Route parsing and formatting for the view shell.
pub mod route;
/// Render-ready screen model derived from fetch state.
pub mod screen;
/// Locale-style timestamp formatting.
pub mod time_fmt;

/// Loopback paste API for tests (`test-support` feature).
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use client::{HttpPasteClient, PasteApi};
pub use config::Config;
pub use constants::*;
pub use error::{ClipboardError, FetchError};
pub use fetch::{FetchMachine, FetchRequest, FetchState, Settlement};
pub use models::paste::Paste;
pub use route::Route;
pub use screen::{toggle_label, Screen, ViewAction};
