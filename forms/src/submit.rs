//! Submitter contract and endpoint reply interpretation.
//!
//! ERROR HANDLING
//! ==============
//! Three failure classes come out of a submit call: a rejection the server
//! explained, a rejection it did not, and a transport failure (including a
//! reply body that is not the expected JSON). All three are terminal for the
//! attempt; there is no retry.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::{Deserialize, Serialize};

use crate::auth::AUTH_FALLBACK_MESSAGE;
use crate::contact::CONTACT_FALLBACK_MESSAGE;
use crate::error::SubmitError;
use crate::session::User;
use crate::status::{Form, FormCell};

/// One outbound request per call, no retries.
///
/// Futures are not required to be `Send`: forms run on the single UI loop.
#[async_trait::async_trait(?Send)]
pub trait Submitter<I> {
    type Output;

    /// # Errors
    ///
    /// Returns the [`SubmitError`] class matching how the request failed.
    async fn submit(&self, input: &I) -> Result<Self::Output, SubmitError>;
}

/// Reply body of the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reply body of the sign-in / sign-up endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn rejection(message: Option<String>, fallback: &'static str) -> SubmitError {
    match message {
        Some(message) if !message.trim().is_empty() => SubmitError::Rejected(message),
        _ => SubmitError::Unsuccessful { fallback },
    }
}

/// Accept only an OK status whose body also reports `success: true`.
///
/// # Errors
///
/// Returns `Rejected` with the body's message, or `Unsuccessful` without one.
pub fn interpret_contact_reply(http_ok: bool, reply: ContactReply) -> Result<(), SubmitError> {
    if http_ok && reply.success {
        return Ok(());
    }
    Err(rejection(reply.message, CONTACT_FALLBACK_MESSAGE))
}

/// Accept any OK status. The user object is passed through as returned; a
/// missing or `null` one becomes `User(null)`.
///
/// # Errors
///
/// On a non-OK status, returns `Rejected` with the body's `error`, or
/// `Unsuccessful` without one.
pub fn interpret_auth_reply(http_ok: bool, reply: AuthReply) -> Result<User, SubmitError> {
    if http_ok {
        return Ok(reply.user.unwrap_or_default());
    }
    Err(rejection(reply.error, AUTH_FALLBACK_MESSAGE))
}

/// Parse a reply body, treating malformed JSON as a transport failure.
///
/// # Errors
///
/// Returns [`SubmitError::Transport`] if `raw` is not a valid `T`.
pub fn parse_reply<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, SubmitError> {
    serde_json::from_str(raw).map_err(SubmitError::transport)
}

/// Drive one submit attempt against a live form.
///
/// Validates, issues exactly one request when validation passes, and records
/// the outcome. Returns the success payload. A call made while another is
/// outstanding returns `None` without touching the network.
pub async fn run_submission<F, C, S>(cell: &C, submitter: &S) -> Option<S::Output>
where
    F: Form,
    C: FormCell<F>,
    S: Submitter<F::Input>,
{
    let pending = cell.with_form(|state| state.begin_submit()).flatten()?;
    let outcome = submitter.submit(&pending.input).await;
    if let Err(SubmitError::Transport { detail }) = &outcome {
        tracing::warn!(%detail, "form submission failed in transport");
    }
    cell.with_form(move |state| state.finish_submit(pending, outcome)).flatten()
}
