//! Centered error card with a single way back home.

use super::super::style::{card_frame, palette, CARD_MAX_WIDTH};
use super::super::FrameActions;
use eframe::egui::{self, RichText};
use pasteview_core::ViewAction;

pub(crate) fn render_error_card(
    ctx: &egui::Context,
    title: &str,
    message: &str,
    dark_mode: bool,
    actions: &mut FrameActions,
) {
    let colors = palette(dark_mode);
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(64.0);
        ui.vertical_centered(|ui| {
            card_frame(colors).show(ui, |ui| {
                ui.set_max_width(CARD_MAX_WIDTH.min(ui.available_width()));
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).heading().color(colors.danger));
                    ui.add_space(12.0);
                    ui.label(RichText::new(message).color(colors.text_muted));
                    ui.add_space(20.0);
                    let go_home = egui::Button::new(RichText::new("Go Home").color(egui::Color32::WHITE))
                        .fill(colors.accent);
                    actions.on_click(&ui.add(go_home), ViewAction::GoHome);
                });
            });
        });
    });
}
