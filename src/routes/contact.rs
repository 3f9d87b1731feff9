//! Self-hosted contact relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `POST /api/contact` is the default target of the site's contact form. It
//! speaks the hosted form service's wire format: a multipart body carrying
//! `access_key`, `name`, `email`, `subject` and `message`, answered with
//! `{ "success": bool, "message": string }`.
//!
//! DESIGN
//! ======
//! The relay re-runs the browser's validation, so a hand-crafted request gets
//! the same messages the form would show. Accepted messages are logged and,
//! when configured, forwarded to the hosted service; the forward's outcome is
//! mirrored back to the browser.
//!
//! ERROR HANDLING
//! ==============
//! Client mistakes answer 4xx, forward failures answer 502. Every reply uses
//! the JSON shape above so the browser's reply interpretation applies as is.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use forms::SubmitError;
use forms::contact::{ContactField, ContactFormInput, validate};
use forms::endpoint::ACCESS_KEY_FIELD;
use serde::Serialize;

use crate::state::AppState;

pub const RECEIVED_MESSAGE: &str = "Message received successfully!";
const INVALID_FORM_MESSAGE: &str = "Invalid form data";
const INVALID_KEY_MESSAGE: &str = "Invalid access key";

const FIELDS: [ContactField; 4] = [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message];

#[derive(Debug, Serialize)]
pub struct RelayReply {
    pub success: bool,
    pub message: String,
}

fn reply(status: StatusCode, success: bool, message: impl Into<String>) -> Response {
    (status, Json(RelayReply { success, message: message.into() })).into_response()
}

/// Fields of one relay request. Unknown fields are ignored.
#[derive(Debug, Default)]
struct RelayForm {
    access_key: Option<String>,
    input: ContactFormInput,
}

async fn read_form(mut multipart: Multipart) -> Result<RelayForm, MultipartError> {
    let mut form = RelayForm::default();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if name == ACCESS_KEY_FIELD {
            form.access_key = Some(field.text().await?);
        } else if let Some(target) = FIELDS.into_iter().find(|f| f.as_str() == name) {
            form.input.set(target, field.text().await?);
        }
    }
    Ok(form)
}

/// `POST /api/contact`: validate, log and optionally forward a message.
pub async fn submit(State(state): State<AppState>, multipart: Result<Multipart, MultipartRejection>) -> Response {
    let Ok(multipart) = multipart else {
        return reply(StatusCode::BAD_REQUEST, false, INVALID_FORM_MESSAGE);
    };
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable contact form body");
            return reply(StatusCode::BAD_REQUEST, false, INVALID_FORM_MESSAGE);
        }
    };

    if let Some(expected) = state.config.contact_access_key.as_deref() {
        if form.access_key.as_deref() != Some(expected) {
            return reply(StatusCode::FORBIDDEN, false, INVALID_KEY_MESSAGE);
        }
    }

    let input = form.input;
    if let Err(e) = validate(&input) {
        return reply(StatusCode::UNPROCESSABLE_ENTITY, false, e.to_string());
    }

    tracing::info!(
        name = %input.name.trim(),
        email = %input.email.trim(),
        subject = %input.subject.trim(),
        message_chars = input.message.chars().count(),
        "contact message received"
    );

    let Some(forwarder) = state.forwarder.as_ref() else {
        return reply(StatusCode::OK, true, RECEIVED_MESSAGE);
    };

    match forwarder.send(&input).await {
        Ok(()) => reply(StatusCode::OK, true, RECEIVED_MESSAGE),
        Err(e) => {
            tracing::warn!(error = ?e, "contact forward failed");
            reply(StatusCode::BAD_GATEWAY, false, forward_failure_message(&e))
        }
    }
}

/// Message relayed to the browser when the forward fails.
///
/// A rejection from the hosted service is passed through; anything else is
/// reported as a generic failure so transport details stay server-side.
fn forward_failure_message(err: &SubmitError) -> String {
    match err {
        SubmitError::Rejected(message) => message.clone(),
        SubmitError::Unsuccessful { fallback } => (*fallback).to_owned(),
        SubmitError::Transport { .. } => forms::contact::CONTACT_FALLBACK_MESSAGE.to_owned(),
    }
}
