//! Panels drawn by the shell; each pushes the actions its widgets produce.

/// Success-state card with the paste content.
pub(super) mod content_card;
/// Failure-state card with the home action.
pub(super) mod error_card;
/// Home view used as the navigation target.
pub(super) mod home;
/// Full-viewport loading indicator.
pub(super) mod loading;
/// Modal copy acknowledgment.
pub(super) mod notice;
/// Fixed-position dark-mode toggle.
pub(super) mod toggle;
