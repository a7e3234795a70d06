//! Protocol types for the fetch worker.

use pasteview_core::{FetchError, FetchRequest, Paste};

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCmd {
    /// Retrieve one paste; the reply echoes `generation`.
    FetchPaste { generation: u64, id: String },
}

impl From<FetchRequest> for FetchCmd {
    fn from(request: FetchRequest) -> Self {
        Self::FetchPaste {
            generation: request.generation,
            id: request.id,
        }
    }
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug, Clone)]
pub enum FetchEvent {
    /// The paste for request `generation` arrived and parsed.
    PasteLoaded { generation: u64, paste: Paste },
    /// Request `generation` failed.
    FetchFailed { generation: u64, error: FetchError },
}

impl FetchEvent {
    pub fn generation(&self) -> u64 {
        match self {
            Self::PasteLoaded { generation, .. } | Self::FetchFailed { generation, .. } => {
                *generation
            }
        }
    }

    /// Split into the generation and the result the state machine consumes.
    pub fn into_settlement(self) -> (u64, Result<Paste, FetchError>) {
        match self {
            Self::PasteLoaded { generation, paste } => (generation, Ok(paste)),
            Self::FetchFailed { generation, error } => (generation, Err(error)),
        }
    }
}
