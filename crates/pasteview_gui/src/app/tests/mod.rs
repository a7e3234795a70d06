//! App-level tests that drive routing, fetch settlement and view actions.

use super::*;
use crate::backend::FetchCmd;
use crossbeam_channel::{unbounded, Receiver, Sender};
use pasteview_core::{ClipboardError, FetchState, Paste, Screen};
use std::cell::RefCell;
use std::rc::Rc;


/// Records every write; optionally refuses them.
#[derive(Clone, Default)]
struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    failure: Option<ClipboardError>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.borrow_mut().push(text.to_string());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

struct TestHarness {
    app: PasteViewApp,
    cmd_rx: Receiver<FetchCmd>,
    evt_tx: Sender<FetchEvent>,
    clipboard_writes: Rc<RefCell<Vec<String>>>,
}

impl TestHarness {
    /// Commands the app has sent so far, oldest first.
    fn sent(&self) -> Vec<FetchCmd> {
        self.cmd_rx.try_iter().collect()
    }

    fn only_fetch(&self) -> (u64, String) {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one fetch, got {:?}", sent);
        match sent.into_iter().next() {
            Some(FetchCmd::FetchPaste { generation, id }) => (generation, id),
            None => unreachable!(),
        }
    }

    fn deliver(&mut self, event: FetchEvent) {
        self.evt_tx.send(event).expect("send event");
        self.app.poll_backend();
    }

    fn deliver_paste(&mut self, generation: u64, paste: Paste) {
        self.deliver(FetchEvent::PasteLoaded { generation, paste });
    }

    fn deliver_error(&mut self, generation: u64, error: FetchError) {
        self.deliver(FetchEvent::FetchFailed { generation, error });
    }

    fn state(&self) -> &FetchState {
        self.app
            .view
            .as_ref()
            .map(|view| view.state())
            .expect("mounted view")
    }

    fn screen(&self) -> Screen<'_> {
        self.app.view.as_ref().expect("mounted view").screen()
    }

    fn click(&mut self, action: ViewAction) {
        self.app.handle_action(AppAction::View(action));
    }

    /// Center of the widget the last frame drew for `action`.
    fn target(&self, action: &AppAction) -> egui::Pos2 {
        self.app
            .action_targets
            .iter()
            .find(|(drawn, _)| drawn == action)
            .map(|(_, rect)| rect.center())
            .unwrap_or_else(|| panic!("no widget drawn for {:?}", action))
    }

    /// Press and release the primary button over the widget for `action`.
    fn click_drawn(&mut self, ctx: &egui::Context, action: impl Into<AppAction>) {
        let pos = self.target(&action.into());
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        run_input_frame(self, ctx, vec![egui::Event::PointerMoved(pos), button(true)]);
        run_input_frame(self, ctx, vec![button(false)]);
    }
}

fn hello() -> Paste {
    Paste::new("hello", "2024-01-01T00:00:00Z")
}

fn make_app_with(route: Route, failure: Option<ClipboardError>) -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let clipboard = RecordingClipboard {
        writes: Rc::new(RefCell::new(Vec::new())),
        failure,
    };
    let clipboard_writes = clipboard.writes.clone();
    let app = PasteViewApp::with_parts(
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        Box::new(clipboard),
        true,
        route,
    );
    TestHarness {
        app,
        cmd_rx,
        evt_tx,
        clipboard_writes,
    }
}

fn make_app(route: Route) -> TestHarness {
    make_app_with(route, None)
}

/// Mount `id` and settle its first fetch with `hello()`.
fn loaded_app(id: &str) -> TestHarness {
    let mut harness = make_app(Route::paste(id));
    let (generation, _) = harness.only_fetch();
    harness.deliver_paste(generation, hello());
    harness
}

fn frame_input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(960.0, 720.0),
        )),
        events,
        ..Default::default()
    }
}

fn run_input_frame(harness: &mut TestHarness, ctx: &egui::Context, events: Vec<egui::Event>) {
    let _ = ctx.run(frame_input(events), |ctx| {
        harness.app.run_frame(ctx);
    });
}

fn run_frames(harness: &mut TestHarness, ctx: &egui::Context, frames: usize) {
    for _ in 0..frames {
        run_input_frame(harness, ctx, Vec::new());
    }
}
