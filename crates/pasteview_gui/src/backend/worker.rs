//! Background worker thread for paste retrieval.

use crate::backend::{FetchCmd, FetchEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use pasteview_core::PasteApi;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<FetchCmd>,
    pub evt_rx: Receiver<FetchEvent>,
}

impl BackendHandle {
    /// Wrap pre-built channels; tests use this to stand in for the worker.
    pub fn from_test_channels(cmd_tx: Sender<FetchCmd>, evt_rx: Receiver<FetchEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }

    /// Queue `cmd` for the worker.
    ///
    /// # Returns
    /// `false` when the worker is gone and the command was dropped.
    pub fn dispatch(&self, cmd: impl Into<FetchCmd>) -> bool {
        match self.cmd_tx.send(cmd.into()) {
            Ok(()) => true,
            Err(err) => {
                warn!("fetch worker disconnected; dropping {:?}", err.0);
                false
            }
        }
    }
}

/// Drain everything already queued behind `first` and keep the newest fetch.
fn coalesce(first: FetchCmd, cmd_rx: &Receiver<FetchCmd>) -> FetchCmd {
    let mut latest = first;
    let mut superseded = 0usize;
    while let Ok(next) = cmd_rx.try_recv() {
        latest = next;
        superseded += 1;
    }
    if superseded > 0 {
        debug!("skipped {} superseded fetch request(s)", superseded);
    }
    latest
}

fn execute<A: PasteApi>(api: &A, cmd: FetchCmd) -> FetchEvent {
    let FetchCmd::FetchPaste { generation, id } = cmd;
    let started = Instant::now();
    let event = match api.fetch_paste(&id) {
        Ok(paste) => FetchEvent::PasteLoaded { generation, paste },
        Err(error) => {
            warn!("fetch of paste '{}' failed: {}", id, error);
            FetchEvent::FetchFailed { generation, error }
        }
    };
    info!(
        target: "pasteview_gui::backend_perf",
        generation = generation,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "fetch settled"
    );
    event
}

/// Spawn the backend worker thread that performs blocking HTTP access.
///
/// All I/O stays off the UI thread; the worker replies with [`FetchEvent`]
/// values that are polled each frame. The thread exits once every command
/// sender is dropped.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend<A>(api: A) -> BackendHandle
where
    A: PasteApi + Send + 'static,
{
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("pasteview-fetch".to_string())
        .spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                let cmd = coalesce(cmd, &cmd_rx);
                if evt_tx.send(execute(&api, cmd)).is_err() {
                    break;
                }
            }
            debug!("fetch worker exiting");
        })
        .expect("spawn fetch worker");

    BackendHandle { cmd_tx, evt_rx }
}
