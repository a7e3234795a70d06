//! Full-viewport loading indicator.

use eframe::egui;

pub(crate) fn render_loading(ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            ui.add(egui::Spinner::new().size(40.0))
                .on_hover_text("Loading...");
        });
    });
}
