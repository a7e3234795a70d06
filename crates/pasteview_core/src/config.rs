//! Configuration loading from environment variables.

use crate::constants::{API_URL_ENV, DARK_MODE_ENV, DEFAULT_API_URL};
use std::env;

/// Runtime configuration for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL the `pastes/{id}` endpoint is mounted under.
    pub api_url: String,
    /// Initial dark-mode flag handed to the application shell.
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            dark_mode: true,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env_flag(name).unwrap_or(false)
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|value| parse_env_flag(&value))
}

/// Trim whitespace and trailing slashes from a base address.
///
/// # Returns
/// `None` when nothing but whitespace or slashes remains.
pub fn normalize_api_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unrecognized.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var(API_URL_ENV)
                .ok()
                .and_then(|raw| normalize_api_url(&raw))
                .unwrap_or(defaults.api_url),
            dark_mode: env_flag(DARK_MODE_ENV).unwrap_or(defaults.dark_mode),
        }
    }

    /// Replace the base address when `api_url` normalizes to something usable.
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url.and_then(normalize_api_url) {
            self.api_url = url;
        }
        self
    }

    /// Replace the dark-mode flag when an explicit choice was made.
    pub fn with_dark_mode(mut self, dark_mode: Option<bool>) -> Self {
        if let Some(dark_mode) = dark_mode {
            self.dark_mode = dark_mode;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScopedEnv;

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn normalize_api_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_api_url(" http://host:3000/api// ").as_deref(),
            Some("http://host:3000/api")
        );
        assert_eq!(normalize_api_url("  / "), None);
    }

    #[test]
    fn from_env_uses_defaults_when_unset() {
        let mut env = ScopedEnv::lock();
        env.remove(API_URL_ENV).remove(DARK_MODE_ENV);

        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn from_env_reads_overrides() {
        let mut env = ScopedEnv::lock();
        env.set(API_URL_ENV, "https://paste.example/api/")
            .set(DARK_MODE_ENV, "off");

        let config = Config::from_env();
        assert_eq!(config.api_url, "https://paste.example/api");
        assert!(!config.dark_mode);
    }

    #[test]
    fn from_env_keeps_default_dark_mode_for_garbage() {
        let mut env = ScopedEnv::lock();
        env.remove(API_URL_ENV).set(DARK_MODE_ENV, "sometimes");

        assert!(Config::from_env().dark_mode);
        assert!(!env_flag_enabled(DARK_MODE_ENV));
    }

    #[test]
    fn explicit_overrides_win_over_loaded_values() {
        let config = Config::default()
            .with_api_url(Some("http://127.0.0.1:9/"))
            .with_dark_mode(Some(false));
        assert_eq!(config.api_url, "http://127.0.0.1:9");
        assert!(!config.dark_mode);

        let untouched = Config::default().with_api_url(Some("   ")).with_dark_mode(None);
        assert_eq!(untouched, Config::default());
    }
}
