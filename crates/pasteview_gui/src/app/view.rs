//! The paste view component: fetch state plus its rendering.

use super::ui;
use super::FrameActions;
use eframe::egui;
use pasteview_core::{
    FetchError, FetchMachine, FetchRequest, FetchState, Paste, Screen, Settlement,
};

/// Mounted view for one route identifier.
///
/// Owns nothing but its fetch state; dark mode arrives as a plain flag at
/// render time.
pub(crate) struct PasteView {
    machine: FetchMachine,
}

impl PasteView {
    pub(crate) fn mount(id: String) -> (Self, FetchRequest) {
        let (machine, request) = FetchMachine::mount(id);
        (Self { machine }, request)
    }

    pub(crate) fn set_identifier(&mut self, id: &str) -> Option<FetchRequest> {
        self.machine.set_identifier(id)
    }

    pub(crate) fn settle(
        &mut self,
        generation: u64,
        result: Result<Paste, FetchError>,
    ) -> Settlement {
        self.machine.settle(generation, result)
    }

    pub(crate) fn identifier(&self) -> &str {
        self.machine.identifier()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.machine.generation()
    }

    pub(crate) fn state(&self) -> &FetchState {
        self.machine.state()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.machine.state().is_loading()
    }

    pub(crate) fn screen(&self) -> Screen<'_> {
        Screen::from_state(self.machine.state())
    }

    /// Content available to the copy action; only present once loaded.
    pub(crate) fn copy_text(&self) -> Option<&str> {
        self.machine
            .state()
            .paste()
            .map(|paste| paste.content.as_str())
    }

    pub(crate) fn render(&self, ctx: &egui::Context, dark_mode: bool, actions: &mut FrameActions) {
        match self.screen() {
            Screen::Loading => ui::loading::render_loading(ctx),
            Screen::Failure { title, message } => {
                ui::error_card::render_error_card(ctx, title, message, dark_mode, actions)
            }
            Screen::Content {
                title,
                created_label,
                content,
            } => ui::content_card::render_content_card(
                ctx,
                ui::content_card::ContentCard {
                    title,
                    created_label: &created_label,
                    content,
                },
                dark_mode,
                actions,
            ),
        }
    }
}
