//! Data models shared by the client and the view.

/// Paste payload returned by the retrieval endpoint.
pub mod paste;
