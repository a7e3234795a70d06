//! Shared test-only helpers: a loopback paste API served by axum.
//!
//! Available to this crate's unit tests and, through the `test-support`
//! feature, to downstream integration tests.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{mpsc, Arc, Mutex};
use std::thread::{self, JoinHandle};
use tokio::sync::oneshot;
use tracing::warn;

/// Canned answer for one paste identifier.
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl StubResponse {
    /// JSON body with `status`.
    ///
    /// # Panics
    /// Panics if `status` is not a valid HTTP status code.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::typed(status, "application/json", body.into())
    }

    /// HTML body with `status`, for decode-failure paths.
    ///
    /// # Panics
    /// Panics if `status` is not a valid HTTP status code.
    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self::typed(status, "text/html; charset=utf-8", body.into())
    }

    fn typed(status: u16, content_type: &'static str, body: String) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            content_type,
            body,
        }
    }
}

struct StubState {
    responses: HashMap<String, StubResponse>,
    requests: Mutex<Vec<String>>,
}

async fn serve_paste(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Response {
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(uri.path().to_string());
    match state.responses.get(&id) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type)],
            canned.body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Paste not found" })),
        )
            .into_response(),
    }
}

/// Paste API on `127.0.0.1:0` serving `GET /api/pastes/:id`.
///
/// Identifiers are matched after percent-decoding; unknown ones answer 404.
/// The server shuts down when the handle drops.
pub struct StubApi {
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubApi {
    /// Start serving `responses`, keyed by decoded paste identifier.
    ///
    /// # Panics
    /// Panics if the runtime, socket or server thread cannot be created.
    pub fn start<I, K>(responses: I) -> Self
    where
        I: IntoIterator<Item = (K, StubResponse)>,
        K: Into<String>,
    {
        let state = Arc::new(StubState {
            responses: responses
                .into_iter()
                .map(|(id, canned)| (id.into(), canned))
                .collect(),
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .route("/api/pastes/:id", get(serve_paste))
            .with_state(Arc::clone(&state));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread = thread::Builder::new()
            .name("pasteview-stub-api".into())
            .spawn(move || {
                let rt = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("stub api runtime");
                let listener = rt
                    .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
                    .expect("bind stub api");
                let addr = listener.local_addr().expect("stub api addr");
                let _ = ready_tx.send(addr);

                let shutdown = async {
                    let _ = shutdown_rx.await;
                };
                let served = rt.block_on(async move {
                    axum::serve(listener, router)
                        .with_graceful_shutdown(shutdown)
                        .await
                });
                if let Err(err) = served {
                    warn!("stub api error: {}", err);
                }
            })
            .expect("spawn stub api");

        let addr = ready_rx.recv().expect("stub api ready");
        Self {
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
            addr,
            state,
        }
    }

    /// Server that answers 404 for every identifier.
    pub fn empty() -> Self {
        Self::start(Vec::<(String, StubResponse)>::new())
    }

    /// Base address to hand to the client, ending in `/api`.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Raw request paths received so far, in arrival order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Base address ending in `/api` with nothing listening behind it.
///
/// # Panics
/// Panics if the loopback listener cannot be bound.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    format!("http://{}/api", addr)
}
