//! Modal acknowledgment for copy results.

use super::super::style::palette;
use super::super::{AppAction, FrameActions, Notice};
use eframe::egui::{self, RichText};

/// Block the view behind a modal until the user dismisses `notice`.
pub(crate) fn render_notice(
    ctx: &egui::Context,
    notice: &Notice,
    dark_mode: bool,
    actions: &mut FrameActions,
) {
    let colors = palette(dark_mode);
    let response = egui::Modal::new(egui::Id::new("copy_notice")).show(ctx, |ui| {
        ui.set_width(300.0);
        let color = if notice.is_error {
            colors.danger
        } else {
            colors.text_primary
        };
        ui.label(RichText::new(&notice.text).color(color));
        ui.add_space(12.0);
        ui.vertical_centered(|ui| ui.button("OK")).inner
    });
    let ok = &response.inner;
    actions.on_click(ok, AppAction::DismissNotice);
    if response.should_close() && !ok.clicked() {
        actions.push(AppAction::DismissNotice);
    }
}
