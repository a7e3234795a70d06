//! Success-state card: header actions, creation time and the content block.

use super::super::style::{card_frame, palette, CARD_MAX_WIDTH};
use super::super::FrameActions;
use eframe::egui::{self, Align, CornerRadius, Layout, Margin, RichText, Stroke};
use pasteview_core::{ViewAction, CONTENT_MAX_HEIGHT};

/// Borrowed pieces of a content screen.
pub(crate) struct ContentCard<'a> {
    pub(crate) title: &'a str,
    pub(crate) created_label: &'a str,
    pub(crate) content: &'a str,
}

pub(crate) fn render_content_card(
    ctx: &egui::Context,
    card: ContentCard<'_>,
    dark_mode: bool,
    actions: &mut FrameActions,
) {
    let colors = palette(dark_mode);
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("content_page")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    card_frame(colors).show(ui, |ui| {
                        ui.set_max_width(CARD_MAX_WIDTH.min(ui.available_width()));
                        ui.with_layout(Layout::top_down(Align::Min), |ui| {
                            ui.horizontal(|ui| {
                                ui.heading(card.title);
                                // right-to-left: the first widget lands rightmost
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    let home = egui::Button::new(
                                        RichText::new("🏠 Home").color(egui::Color32::WHITE),
                                    )
                                    .fill(colors.accent)
                                    .small();
                                    actions.on_click(&ui.add(home), ViewAction::GoHome);
                                    let copy = egui::Button::new(
                                        RichText::new("📋 Copy").color(egui::Color32::WHITE),
                                    )
                                    .fill(colors.success)
                                    .small();
                                    actions.on_click(&ui.add(copy), ViewAction::Copy);
                                });
                            });
                            ui.add_space(12.0);
                            ui.label(
                                RichText::new(card.created_label)
                                    .small()
                                    .color(colors.text_muted),
                            );
                            ui.separator();
                            ui.add_space(4.0);
                            render_content_block(ui, card.content, colors.bg_code, colors.border);
                        });
                    });
                });
                ui.add_space(48.0);
            });
    });
}

fn render_content_block(
    ui: &mut egui::Ui,
    content: &str,
    fill: egui::Color32,
    border: egui::Color32,
) {
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("paste_content")
                .max_height(CONTENT_MAX_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    // Label wraps overlong runs mid-word once no break point fits.
                    ui.add(
                        egui::Label::new(RichText::new(content).monospace())
                            .wrap()
                            .selectable(true),
                    );
                });
        });
}
