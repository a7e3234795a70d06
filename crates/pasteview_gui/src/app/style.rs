//! Dark and light palettes plus style application for the egui shell.

use super::PasteViewApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    pub(super) bg_page: Color32,
    pub(super) bg_card: Color32,
    pub(super) bg_code: Color32,
    pub(super) text_primary: Color32,
    pub(super) text_muted: Color32,
    pub(super) accent: Color32,
    pub(super) accent_hover: Color32,
    pub(super) success: Color32,
    pub(super) danger: Color32,
    pub(super) border: Color32,
}

pub(super) const DARK: Palette = Palette {
    bg_page: Color32::from_rgb(0x0d, 0x11, 0x17),
    bg_card: Color32::from_rgb(0x16, 0x1b, 0x22),
    bg_code: Color32::from_rgb(0x21, 0x26, 0x29),
    text_primary: Color32::from_rgb(0xc9, 0xd1, 0xd9),
    text_muted: Color32::from_rgb(0x8b, 0x94, 0x9e),
    accent: Color32::from_rgb(0x3b, 0x82, 0xf6),
    accent_hover: Color32::from_rgb(0x25, 0x63, 0xeb),
    success: Color32::from_rgb(0x23, 0x86, 0x36),
    danger: Color32::from_rgb(0xf8, 0x51, 0x49),
    border: Color32::from_rgb(0x30, 0x36, 0x3d),
};

pub(super) const LIGHT: Palette = Palette {
    bg_page: Color32::from_rgb(0xf8, 0xf9, 0xfa),
    bg_card: Color32::WHITE,
    bg_code: Color32::from_rgb(0xf1, 0xf3, 0xf5),
    text_primary: Color32::from_rgb(0x21, 0x25, 0x29),
    text_muted: Color32::from_rgb(0x6c, 0x75, 0x7d),
    accent: Color32::from_rgb(0x0d, 0x6e, 0xfd),
    accent_hover: Color32::from_rgb(0x0b, 0x5e, 0xd7),
    success: Color32::from_rgb(0x19, 0x87, 0x54),
    danger: Color32::from_rgb(0xdc, 0x35, 0x45),
    border: Color32::from_rgb(0xde, 0xe2, 0xe6),
};

pub(super) fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

pub(super) const CARD_MAX_WIDTH: f32 = 820.0;

/// Frame shared by the error and content cards.
pub(super) fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.bg_card)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(28))
}

fn widget(bg: Color32, stroke: Color32, fg: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(6),
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

/// Build the full egui style for one mode.
pub(super) fn build_style(base: &egui::Style, dark_mode: bool) -> egui::Style {
    let colors = palette(dark_mode);
    let mut style = base.clone();
    style.visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    style.visuals.override_text_color = Some(colors.text_primary);
    style.visuals.window_fill = colors.bg_card;
    style.visuals.panel_fill = colors.bg_page;
    style.visuals.extreme_bg_color = colors.bg_code;
    style.visuals.faint_bg_color = colors.bg_code;
    style.visuals.window_stroke = Stroke::new(1.0, colors.border);
    style.visuals.hyperlink_color = colors.accent;
    style.visuals.selection.bg_fill = colors.accent.gamma_multiply(0.35);
    style.visuals.selection.stroke = Stroke::new(1.0, colors.accent);

    style.visuals.widgets.noninteractive =
        widget(colors.bg_card, colors.border, colors.text_muted, 0.0);
    style.visuals.widgets.inactive =
        widget(colors.bg_code, colors.border, colors.text_primary, 0.0);
    style.visuals.widgets.hovered =
        widget(colors.accent_hover, colors.accent_hover, Color32::WHITE, 0.5);
    style.visuals.widgets.active = widget(colors.accent, colors.accent, Color32::WHITE, 0.5);
    style.visuals.widgets.open = widget(colors.accent, colors.accent, Color32::WHITE, 0.0);

    style.spacing.window_margin = Margin::same(16);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.interact_size.y = 30.0;
    style.spacing.text_edit_width = 320.0;

    style.text_styles.insert(
        TextStyle::Heading,
        FontId::new(22.0, FontFamily::Proportional),
    );
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    style.text_styles.insert(
        TextStyle::Button,
        FontId::new(14.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Monospace,
        FontId::new(14.0, FontFamily::Monospace),
    );
    style.text_styles.insert(
        TextStyle::Small,
        FontId::new(12.0, FontFamily::Proportional),
    );
    style
}

impl PasteViewApp {
    /// Re-apply visuals whenever the shell's dark-mode flag changed.
    pub(super) fn ensure_theme(&mut self, ctx: &egui::Context) {
        if self.theme_applied == Some(self.dark_mode) {
            return;
        }
        let style = build_style(&ctx.style(), self.dark_mode);
        ctx.set_style(style);
        self.theme_applied = Some(self.dark_mode);
    }
}
