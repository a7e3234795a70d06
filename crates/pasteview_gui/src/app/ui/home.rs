//! Home view: the navigation target with a field to open a paste.

use super::super::{AppAction, FrameActions};
use eframe::egui::{self, RichText};
use pasteview_core::Route;

pub(crate) fn render_home(ctx: &egui::Context, input: &mut String, actions: &mut FrameActions) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(96.0);
        ui.vertical_centered(|ui| {
            ui.heading("PasteView");
            ui.add_space(8.0);
            ui.label(RichText::new("Open a shared paste by ID or /paste/{id} path.").weak());
            ui.add_space(16.0);
            let mut submit = false;
            ui.horizontal(|ui| {
                let field = ui.add(
                    egui::TextEdit::singleline(input)
                        .hint_text("Paste ID")
                        .desired_width(320.0),
                );
                if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui.button("Open").clicked() {
                    submit = true;
                }
            });
            if submit {
                if let Some(route) = route_from_input(input) {
                    input.clear();
                    actions.push(AppAction::Navigate(route));
                }
            }
        });
    });
}

/// Route for the home field, or `None` when the input names no paste.
pub(crate) fn route_from_input(input: &str) -> Option<Route> {
    match Route::from_user_input(input) {
        Route::Home => None,
        route => Some(route),
    }
}
