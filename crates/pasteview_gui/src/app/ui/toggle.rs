//! Fixed-position dark-mode toggle shared by every view.

use super::super::FrameActions;
use eframe::egui;
use pasteview_core::{toggle_label, ViewAction};

/// Draw the toggle in the top-right corner.
///
/// The mode is read-only here; a click only requests a flip from the shell.
pub(crate) fn render_dark_mode_toggle(
    ctx: &egui::Context,
    dark_mode: bool,
    actions: &mut FrameActions,
) {
    egui::Area::new(egui::Id::new("dark_mode_toggle"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let toggle = ui.button(toggle_label(dark_mode));
            actions.on_click(&toggle, ViewAction::ToggleDarkMode);
        });
}
