//! Blocking HTTP client for the paste retrieval endpoint.

use crate::constants::PASTES_PATH_SEGMENT;
use crate::error::FetchError;
use crate::models::paste::Paste;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Source of pastes keyed by identifier.
///
/// The GUI worker only depends on this seam, so tests can swap in scripted
/// sources without a network.
pub trait PasteApi {
    /// Retrieve one paste by its opaque identifier.
    ///
    /// # Errors
    /// Returns [`FetchError::NotFound`] for any non-success status,
    /// [`FetchError::Transport`] when no response arrives and
    /// [`FetchError::Decode`] when the body is not a paste.
    fn fetch_paste(&self, id: &str) -> Result<Paste, FetchError>;
}

/// Build `{base}/pastes/{id}` with `id` encoded as a single path segment.
///
/// # Errors
/// Returns [`FetchError::InvalidBaseUrl`] when `base` does not parse or cannot
/// carry path segments, and [`FetchError::EmptyIdentifier`] for an empty id.
pub fn paste_url(base: &str, id: &str) -> Result<Url, FetchError> {
    if id.is_empty() {
        return Err(FetchError::EmptyIdentifier);
    }
    let mut url = Url::parse(base.trim())
        .map_err(|err| FetchError::InvalidBaseUrl(format!("'{}': {}", base, err)))?;
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            FetchError::InvalidBaseUrl(format!("'{}' cannot be used as an API base", base))
        })?;
        path.pop_if_empty();
        path.push(PASTES_PATH_SEGMENT);
        path.push(id);
    }
    Ok(url)
}

/// [`PasteApi`] over HTTP using a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpPasteClient {
    base: String,
    http: Client,
}

impl HttpPasteClient {
    /// Create a client for the API mounted at `base`.
    ///
    /// Requests carry no timeout; a request only settles when the server
    /// answers or the connection fails.
    ///
    /// # Errors
    /// Returns [`FetchError::InvalidBaseUrl`] for an unusable base address and
    /// [`FetchError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(base: impl Into<String>) -> Result<Self, FetchError> {
        let base = base.into();
        // Validate once up front so a bad config fails at startup.
        paste_url(&base, "probe")?;
        let http = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("pasteview/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base, http })
    }

    /// Base address this client targets.
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl PasteApi for HttpPasteClient {
    fn fetch_paste(&self, id: &str) -> Result<Paste, FetchError> {
        let url = paste_url(&self.base, id)?;
        debug!("GET {}", url);
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NotFound {
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        Paste::from_json(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}
