//! Shared constants used across PasteView crates.

/// Default base address of the paste API when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Path segment under the base address where pastes are served.
pub const PASTES_PATH_SEGMENT: &str = "pastes";

/// Environment variable holding the API base address.
pub const API_URL_ENV: &str = "PASTEVIEW_API_URL";

/// Environment variable holding the initial dark-mode flag.
pub const DARK_MODE_ENV: &str = "PASTEVIEW_DARK_MODE";

/// Message shown for any non-success HTTP status.
pub const NOT_FOUND_MESSAGE: &str = "Paste not found";

/// Acknowledgment shown after a successful clipboard write.
pub const COPY_ACK_MESSAGE: &str = "Copied to clipboard!";

/// Prefix for the acknowledgment shown when a clipboard write fails.
pub const COPY_FAILED_PREFIX: &str = "Copy failed";

/// Heading of the content card.
pub const CONTENT_TITLE: &str = "Shared Text";

/// Heading of the error card.
pub const ERROR_TITLE: &str = "Error";

/// Label of the toggle while dark mode is active (next mode is light).
pub const TOGGLE_LABEL_WHEN_DARK: &str = "☀ Light";

/// Label of the toggle while light mode is active (next mode is dark).
pub const TOGGLE_LABEL_WHEN_LIGHT: &str = "🌙 Dark";

/// Maximum height of the content block before it scrolls, in logical pixels.
pub const CONTENT_MAX_HEIGHT: f32 = 600.0;
