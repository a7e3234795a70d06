//! Error types for the fetch and clipboard paths.
use thiserror::Error;

/// Failure while retrieving a paste.
///
/// `Display` is the exact text shown on the error card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Any non-success HTTP status.
    #[error("Paste not found")]
    NotFound { status: u16 },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body was not a valid paste.
    #[error("{0}")]
    Decode(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Paste identifier is empty")]
    EmptyIdentifier,
}

impl FetchError {
    /// Message rendered in the failure view.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Failure while writing to the system clipboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bad_status_reads_as_not_found() {
        for status in [400, 404, 410, 500, 503] {
            assert_eq!(
                FetchError::NotFound { status }.user_message(),
                crate::constants::NOT_FOUND_MESSAGE
            );
        }
    }

    #[test]
    fn transport_and_decode_surface_underlying_text() {
        assert_eq!(
            FetchError::Transport("connection refused".to_string()).user_message(),
            "connection refused"
        );
        assert_eq!(
            FetchError::Decode("expected value at line 1 column 1".to_string()).user_message(),
            "expected value at line 1 column 1"
        );
    }
}
