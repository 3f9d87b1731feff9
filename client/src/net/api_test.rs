#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;

use forms::auth::{AuthFields, AuthMode};
use forms::error::NETWORK_ERROR_MESSAGE;
use forms::{FailureKind, FormState, run_submission};

use super::*;

fn contact() -> ContactFormInput {
    ContactFormInput {
        name: "Jo".to_owned(),
        email: "a@b.com".to_owned(),
        subject: "Hi!".to_owned(),
        message: "This is ten+".to_owned(),
    }
}

#[tokio::test]
async fn contact_submitter_is_unavailable_off_browser() {
    let err = GlooContactSubmitter::default().submit(&contact()).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn auth_submitter_is_unavailable_off_browser() {
    let fields = AuthFields {
        mode: AuthMode::SignIn,
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        ..AuthFields::default()
    };
    let err = GlooAuthSubmitter.submit(&fields.validate().unwrap()).await.unwrap_err();
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn failed_submission_leaves_form_resubmittable() {
    let cell = RefCell::new(FormState::new(contact()));
    assert_eq!(run_submission(&cell, &GlooContactSubmitter::default()).await, None);
    let state = cell.borrow();
    assert!(!state.is_submitting());
    assert_eq!(state.status.message(), Some(NETWORK_ERROR_MESSAGE));
}
