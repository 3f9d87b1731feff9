use std::cell::{Cell, RefCell};

use serde_json::json;

use super::*;
use crate::auth::{AuthFields, AuthMode};
use crate::contact::ContactFormInput;
use crate::error::{FailureKind, NETWORK_ERROR_MESSAGE};
use crate::status::{FormState, Phase, SubmissionStatus};

fn valid_contact() -> ContactFormInput {
    ContactFormInput {
        name: "Jo".to_owned(),
        email: "a@b.com".to_owned(),
        subject: "Hi!".to_owned(),
        message: "This is ten+".to_owned(),
    }
}

/// Replays a fixed outcome and counts calls.
struct Canned<T> {
    outcome: Result<T, SubmitError>,
    calls: Cell<usize>,
}

impl<T> Canned<T> {
    fn new(outcome: Result<T, SubmitError>) -> Self {
        Self { outcome, calls: Cell::new(0) }
    }
}

#[async_trait::async_trait(?Send)]
impl<I, T: Clone> Submitter<I> for Canned<T> {
    type Output = T;

    async fn submit(&self, _input: &I) -> Result<T, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

/// Blocks until released, so a second submit can race the first.
#[derive(Default)]
struct Gated {
    calls: Cell<usize>,
    gate: tokio::sync::Notify,
}

#[async_trait::async_trait(?Send)]
impl Submitter<ContactFormInput> for Gated {
    type Output = ();

    async fn submit(&self, _input: &ContactFormInput) -> Result<(), SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.gate.notified().await;
        Ok(())
    }
}

/// A form whose component has already been torn down.
struct Unmounted;

impl FormCell<ContactFormInput> for Unmounted {
    fn with_form<R>(&self, _f: impl FnOnce(&mut FormState<ContactFormInput>) -> R) -> Option<R> {
        None
    }
}

// =============================================================================
// interpret_contact_reply
// =============================================================================

#[test]
fn contact_success_requires_ok_status_and_flag() {
    let yes = ContactReply { success: true, message: None };
    assert_eq!(interpret_contact_reply(true, yes.clone()), Ok(()));
    assert_eq!(
        interpret_contact_reply(false, yes),
        Err(SubmitError::Unsuccessful { fallback: CONTACT_FALLBACK_MESSAGE })
    );
}

#[test]
fn contact_rejection_message_is_verbatim() {
    let reply = ContactReply { success: false, message: Some("Rate limited".to_owned()) };
    assert_eq!(interpret_contact_reply(true, reply), Err(SubmitError::Rejected("Rate limited".to_owned())));
}

#[test]
fn contact_empty_message_uses_fallback() {
    let reply = ContactReply { success: false, message: Some(String::new()) };
    assert_eq!(
        interpret_contact_reply(true, reply).unwrap_err().to_string(),
        "Failed to send message. Please try again."
    );
}

// =============================================================================
// interpret_auth_reply
// =============================================================================

#[test]
fn auth_ok_with_user_succeeds() {
    let reply: AuthReply = parse_reply(r#"{"user":{"name":"Ada"}}"#).unwrap();
    let user = interpret_auth_reply(true, reply).unwrap();
    assert_eq!(user.display_name(), Some("Ada"));
}

#[test]
fn auth_error_body_is_verbatim() {
    let reply: AuthReply = parse_reply(r#"{"error":"Invalid credentials"}"#).unwrap();
    assert_eq!(interpret_auth_reply(false, reply), Err(SubmitError::Rejected("Invalid credentials".to_owned())));
}

#[test]
fn auth_failure_without_error_uses_fallback() {
    let err = interpret_auth_reply(false, AuthReply::default()).unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed. Please try again.");
}

#[test]
fn auth_ok_status_alone_is_success() {
    for raw in ["{}", r#"{"user":null}"#, r#"{"error":"ignored on 2xx"}"#] {
        let reply: AuthReply = parse_reply(raw).unwrap();
        let user = interpret_auth_reply(true, reply).unwrap();
        assert_eq!(user, User(serde_json::Value::Null), "expected success for {raw}");
    }
}

#[test]
fn malformed_body_is_transport_failure() {
    let err = parse_reply::<ContactReply>("<html>502 Bad Gateway</html>").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

// =============================================================================
// run_submission
// =============================================================================

#[tokio::test]
async fn invalid_input_never_calls_submitter() {
    let cell = RefCell::new(FormState::new(ContactFormInput { name: "J".to_owned(), ..valid_contact() }));
    let submitter = Canned::new(Ok(()));

    assert_eq!(run_submission(&cell, &submitter).await, None);
    assert_eq!(submitter.calls.get(), 0);
    assert_eq!(cell.borrow().status.message(), Some("Name must be at least 2 characters long"));
}

#[tokio::test]
async fn server_rejection_becomes_error_status() {
    let cell = RefCell::new(FormState::new(valid_contact()));
    let submitter = Canned::<()>::new(Err(SubmitError::Rejected("Rate limited".to_owned())));

    assert_eq!(run_submission(&cell, &submitter).await, None);
    let state = cell.borrow();
    assert_eq!(
        state.status,
        SubmissionStatus::Error { kind: FailureKind::Rejected, message: "Rate limited".to_owned() }
    );
    assert_eq!(state.fields, valid_contact());
}

#[tokio::test]
async fn transport_failure_releases_guard() {
    let cell = RefCell::new(FormState::new(valid_contact()));
    let submitter = Canned::<()>::new(Err(SubmitError::transport("dns lookup failed")));

    run_submission(&cell, &submitter).await;
    let state = cell.borrow();
    assert!(!state.is_submitting());
    assert_eq!(state.status.message(), Some(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn contact_success_clears_fields() {
    let cell = RefCell::new(FormState::new(valid_contact()));
    let submitter = Canned::new(Ok(()));

    assert_eq!(run_submission(&cell, &submitter).await, Some(()));
    let state = cell.borrow();
    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.fields, ContactFormInput::default());
}

#[tokio::test]
async fn auth_success_returns_user() {
    let fields = AuthFields {
        mode: AuthMode::SignIn,
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        ..AuthFields::default()
    };
    let cell = RefCell::new(FormState::new(fields));
    let submitter = Canned::new(Ok(User(json!({ "name": "Ada" }))));

    let user = run_submission(&cell, &submitter).await.unwrap();
    assert_eq!(user.display_name(), Some("Ada"));
    assert_eq!(cell.borrow().status.message(), Some("Welcome back!"));
}

#[tokio::test]
async fn overlapping_submit_is_a_noop() {
    let cell = RefCell::new(FormState::new(valid_contact()));
    let submitter = Gated::default();

    let first = run_submission(&cell, &submitter);
    let second = async {
        let out = run_submission(&cell, &submitter).await;
        submitter.gate.notify_one();
        out
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first, Some(()));
    assert_eq!(second, None);
    assert_eq!(submitter.calls.get(), 1);
    assert!(!cell.borrow().is_submitting());
}

#[tokio::test]
async fn unmounted_form_issues_no_request() {
    let submitter = Canned::new(Ok(()));
    assert_eq!(run_submission(&Unmounted, &submitter).await, None);
    assert_eq!(submitter.calls.get(), 0);
}
