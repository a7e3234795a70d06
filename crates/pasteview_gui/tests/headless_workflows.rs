//! Headless workflows: real HTTP client and fetch worker against a loopback API.

use crossbeam_channel::Receiver;
use pasteview_core::test_support::{refused_base_url, StubApi, StubResponse};
use pasteview_core::{FetchMachine, FetchState, HttpPasteClient, Screen, ViewAction};
use pasteview_gui::backend::{spawn_backend, BackendHandle, FetchEvent};
use std::time::Duration;

fn recv_event(rx: &Receiver<FetchEvent>) -> FetchEvent {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("expected backend event")
}

fn backend_for(base_url: &str) -> BackendHandle {
    spawn_backend(HttpPasteClient::new(base_url).expect("client"))
}

/// Mount `id`, run its fetch through the worker and settle the machine.
fn mount_and_settle(backend: &BackendHandle, id: &str) -> FetchMachine {
    let (mut machine, request) = FetchMachine::mount(id);
    assert!(backend.dispatch(request));
    let (generation, result) = recv_event(&backend.evt_rx).into_settlement();
    machine.settle(generation, result);
    machine
}

#[test]
fn shared_paste_loads_into_content_screen() {
    let api = StubApi::start([(
        "abc-123",
        StubResponse::json(
            200,
            r#"{"id":12,"uuid":"abc-123","content":"fn main() {}\n","created_at":"2024-01-01T00:00:00Z","views":3}"#,
        ),
    )]);
    let backend = backend_for(&api.base_url());

    let machine = mount_and_settle(&backend, "abc-123");

    let paste = machine.state().paste().expect("loaded paste");
    assert_eq!(paste.content, "fn main() {}\n");
    let screen = Screen::from_state_in(machine.state(), &chrono::Utc);
    assert_eq!(
        screen,
        Screen::Content {
            title: "Shared Text",
            created_label: "Created: 1/1/2024, 12:00:00 AM".to_string(),
            content: "fn main() {}\n",
        }
    );
    assert!(screen.offers(ViewAction::Copy));
    assert_eq!(api.requested_paths(), vec!["/api/pastes/abc-123"]);
}

#[test]
fn missing_paste_shows_not_found() {
    let api = StubApi::empty();
    let backend = backend_for(&api.base_url());

    let machine = mount_and_settle(&backend, "nope");

    assert_eq!(machine.state().failure_message(), Some("Paste not found"));
    let screen = Screen::from_state(machine.state());
    assert!(screen.offers(ViewAction::GoHome));
    assert!(!screen.offers(ViewAction::Copy));
}

#[test]
fn server_error_status_is_reported_as_not_found() {
    let api = StubApi::start([(
        "boom",
        StubResponse::json(500, r#"{"content":"ignored","created_at":"2024-01-01"}"#),
    )]);
    let backend = backend_for(&api.base_url());

    let machine = mount_and_settle(&backend, "boom");
    assert_eq!(machine.state().failure_message(), Some("Paste not found"));
}

#[test]
fn malformed_body_fails_without_content() {
    let api = StubApi::start([("html", StubResponse::html(200, "<html>oops</html>"))]);
    let backend = backend_for(&api.base_url());

    let machine = mount_and_settle(&backend, "html");

    assert!(matches!(machine.state(), FetchState::Failure(_)));
    assert!(machine.state().paste().is_none());
}

#[test]
fn unreachable_api_surfaces_transport_error() {
    let backend = backend_for(&refused_base_url());

    let machine = mount_and_settle(&backend, "abc");

    let message = machine
        .state()
        .failure_message()
        .expect("failure message")
        .to_string();
    assert!(!message.is_empty());
    assert_ne!(message, "Paste not found");
}

#[test]
fn identifier_with_reserved_characters_stays_one_segment() {
    let api = StubApi::start([(
        "a b/c",
        StubResponse::json(200, r#"{"content":"odd id","created_at":"2024-01-01T00:00:00Z"}"#),
    )]);
    let backend = backend_for(&api.base_url());

    let machine = mount_and_settle(&backend, "a b/c");

    assert_eq!(
        machine.state().paste().map(|p| p.content.as_str()),
        Some("odd id")
    );
    assert_eq!(api.requested_paths(), vec!["/api/pastes/a%20b%2Fc"]);
}

#[test]
fn switching_identifiers_settles_on_the_latest_request() {
    let api = StubApi::start([
        (
            "one",
            StubResponse::json(200, r#"{"content":"first","created_at":"2024-01-01T00:00:00Z"}"#),
        ),
        (
            "two",
            StubResponse::json(200, r#"{"content":"second","created_at":"2024-01-02T00:00:00Z"}"#),
        ),
    ]);
    let backend = backend_for(&api.base_url());

    let (mut machine, first) = FetchMachine::mount("one");
    assert!(backend.dispatch(first));
    let second = machine.set_identifier("two").expect("re-armed");
    assert!(backend.dispatch(second));

    // The worker may coalesce the first request away; drain until the latest settles.
    while machine.state().is_loading() {
        let (generation, result) = recv_event(&backend.evt_rx).into_settlement();
        machine.settle(generation, result);
    }

    assert_eq!(
        machine.state().paste().map(|p| p.content.as_str()),
        Some("second")
    );
}
