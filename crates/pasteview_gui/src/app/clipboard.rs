//! Result-bearing clipboard access.

use pasteview_core::ClipboardError;
use tracing::info;

/// Destination for copied text.
pub(crate) trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    /// Returns a [`ClipboardError`] when the platform clipboard cannot be
    /// opened or refuses the write.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is opened on first use and kept alive afterwards; on X11 the
/// copied text only stays available while its owner lives.
#[derive(Default)]
pub(crate) struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let opened = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?,
        };
        let clipboard = self.inner.insert(opened);
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;
        info!("copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
