//! Native egui shell hosting the paste view.

mod clipboard;
mod style;
mod ui;
mod view;

use crate::backend::{spawn_backend, BackendHandle, FetchEvent};
use clipboard::{ClipboardWriter, SystemClipboard};
use crossbeam_channel::TryRecvError;
use eframe::egui;
use pasteview_core::{
    Config, FetchError, HttpPasteClient, Route, Settlement, ViewAction, COPY_ACK_MESSAGE,
    COPY_FAILED_PREFIX,
};
use std::time::Duration;
use tracing::{error, info, warn};
use view::PasteView;

pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [960.0, 720.0];
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 360.0];
const LOADING_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Acknowledgment shown after a copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) text: String,
    pub(crate) is_error: bool,
}

/// Everything a frame's rendering can ask the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppAction {
    View(ViewAction),
    Navigate(Route),
    DismissNotice,
}

impl From<ViewAction> for AppAction {
    fn from(action: ViewAction) -> Self {
        Self::View(action)
    }
}

/// Actions raised while drawing one frame, plus where each clickable sits.
#[derive(Debug, Default)]
pub(crate) struct FrameActions {
    raised: Vec<AppAction>,
    targets: Vec<(AppAction, egui::Rect)>,
}

impl FrameActions {
    pub(crate) fn push(&mut self, action: impl Into<AppAction>) {
        self.raised.push(action.into());
    }

    /// Register `response` as the widget for `action`; raise it when clicked.
    pub(crate) fn on_click(&mut self, response: &egui::Response, action: impl Into<AppAction>) {
        let action = action.into();
        if response.clicked() {
            self.raised.push(action.clone());
        }
        self.targets.push((action, response.rect));
    }
}

/// Application shell: owns routing, the dark-mode flag and the clipboard.
///
/// The paste view itself owns only its fetch state; dark mode is read from
/// here and toggled through [`ViewAction::ToggleDarkMode`].
pub(crate) struct PasteViewApp {
    backend: BackendHandle,
    route: Route,
    view: Option<PasteView>,
    dark_mode: bool,
    theme_applied: Option<bool>,
    clipboard: Box<dyn ClipboardWriter>,
    notice: Option<Notice>,
    home_input: String,
    /// Clickable regions drawn by the last frame.
    action_targets: Vec<(AppAction, egui::Rect)>,
}

impl PasteViewApp {
    /// Construct the shell from `config` and open `initial_route`.
    ///
    /// # Errors
    /// Returns an error when the configured API base address is unusable.
    pub(crate) fn new(config: &Config, initial_route: Route) -> Result<Self, FetchError> {
        let client = HttpPasteClient::new(config.api_url.clone())?;
        info!("paste API base: {}", client.base());
        let backend = spawn_backend(client);
        Ok(Self::with_parts(
            backend,
            Box::new(SystemClipboard::default()),
            config.dark_mode,
            initial_route,
        ))
    }

    fn with_parts(
        backend: BackendHandle,
        clipboard: Box<dyn ClipboardWriter>,
        dark_mode: bool,
        initial_route: Route,
    ) -> Self {
        let mut app = Self {
            backend,
            route: Route::Home,
            view: None,
            dark_mode,
            theme_applied: None,
            clipboard,
            notice: None,
            home_input: String::new(),
            action_targets: Vec::new(),
        };
        app.navigate(initial_route);
        app
    }

    /// Point the shell at `route`, mounting, re-arming or dropping the view.
    pub(crate) fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!("navigate {} -> {}", self.route, route);
        self.notice = None;
        match &route {
            Route::Home => {
                self.view = None;
            }
            Route::Paste { id } => {
                let request = match self.view.as_mut() {
                    Some(view) => view.set_identifier(id),
                    None => {
                        let (view, request) = PasteView::mount(id.clone());
                        self.view = Some(view);
                        Some(request)
                    }
                };
                if let Some(request) = request {
                    self.backend.dispatch(request);
                }
            }
        }
        self.route = route;
    }

    /// Drain worker events and settle the mounted view.
    pub(crate) fn poll_backend(&mut self) {
        loop {
            match self.backend.evt_rx.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.fail_pending("fetch worker stopped");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: FetchEvent) {
        let (generation, result) = event.into_settlement();
        let Some(view) = self.view.as_mut() else {
            warn!("dropping fetch result {} with no mounted view", generation);
            return;
        };
        if view.settle(generation, result) == Settlement::Applied {
            info!("paste '{}' settled", view.identifier());
        }
    }

    fn fail_pending(&mut self, reason: &str) {
        if let Some(view) = self.view.as_mut() {
            if view.is_loading() {
                error!("{}; failing pending fetch", reason);
                let generation = view.generation();
                view.settle(generation, Err(FetchError::Transport(reason.to_string())));
            }
        }
    }

    pub(crate) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::View(ViewAction::ToggleDarkMode) => {
                self.dark_mode = !self.dark_mode;
                info!("dark mode {}", if self.dark_mode { "on" } else { "off" });
            }
            AppAction::View(ViewAction::GoHome) => self.navigate(Route::Home),
            AppAction::View(ViewAction::Copy) => self.copy_content(),
            AppAction::Navigate(route) => self.navigate(route),
            AppAction::DismissNotice => self.notice = None,
        }
    }

    fn copy_content(&mut self) {
        let Some(content) = self.view.as_ref().and_then(PasteView::copy_text) else {
            return;
        };
        self.notice = Some(match self.clipboard.write_text(content) {
            Ok(()) => Notice {
                text: COPY_ACK_MESSAGE.to_string(),
                is_error: false,
            },
            Err(err) => {
                error!("copy to clipboard failed: {}", err);
                Notice {
                    text: format!("{}: {}", COPY_FAILED_PREFIX, err),
                    is_error: true,
                }
            }
        });
    }

    fn render(&mut self, ctx: &egui::Context) -> FrameActions {
        let mut actions = FrameActions::default();
        match self.view.as_ref() {
            Some(view) => view.render(ctx, self.dark_mode, &mut actions),
            None => ui::home::render_home(ctx, &mut self.home_input, &mut actions),
        }
        ui::toggle::render_dark_mode_toggle(ctx, self.dark_mode, &mut actions);
        if let Some(notice) = &self.notice {
            ui::notice::render_notice(ctx, notice, self.dark_mode, &mut actions);
        }
        actions
    }

    /// One UI-thread turn: theme, worker events, drawing, then actions.
    pub(crate) fn run_frame(&mut self, ctx: &egui::Context) {
        self.ensure_theme(ctx);
        self.poll_backend();

        let frame = self.render(ctx);
        self.action_targets = frame.targets;
        self.update_cursor(ctx);
        for action in frame.raised {
            self.handle_action(action);
        }

        if self.view.as_ref().is_some_and(PasteView::is_loading) {
            ctx.request_repaint_after(LOADING_POLL_INTERVAL);
        }
        if self.theme_applied != Some(self.dark_mode) {
            ctx.request_repaint();
        }
    }

    /// Pointing hand over any reachable clickable; the modal blocks the rest.
    fn update_cursor(&self, ctx: &egui::Context) {
        let Some(pointer) = ctx.pointer_hover_pos() else {
            return;
        };
        let modal_open = self.notice.is_some();
        let over_target = self.action_targets.iter().any(|(action, rect)| {
            (!modal_open || *action == AppAction::DismissNotice) && rect.contains(pointer)
        });
        if over_target {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }
}

impl eframe::App for PasteViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

#[cfg(test)]
mod tests;
