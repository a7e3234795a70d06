//! Paste payload returned by `GET {base}/pastes/{id}`.

use serde::{Deserialize, Serialize};

/// A stored, immutable text snippet.
///
/// Only `content` and `created_at` are read. Every other field in the API
/// response, identifiers included, is ignored whatever its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    pub content: String,
    /// Raw timestamp string; formatting happens at render time.
    pub created_at: String,
}

impl Paste {
    /// Build a paste from its two required fields.
    pub fn new(content: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_at: created_at.into(),
        }
    }

    /// Parse a paste from a JSON response body.
    ///
    /// # Errors
    /// Returns the `serde_json` error when the body is not a JSON object with
    /// string `content` and `created_at` fields.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
