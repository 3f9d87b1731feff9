//! Form core shared by the portfolio server and the browser client.
//!
//! This crate owns everything a form needs that is not rendering: field
//! state, validation, the submit contract and its response interpretation,
//! the status state machine, and the persisted session store. It has no
//! browser or server dependencies so both sides of the app use the same rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two forms exist on the site: the contact form (`contact`) and the
//! sign-in / sign-up modal (`auth`). Each is driven through the same
//! [`status::FormState`] machine and [`submit::run_submission`] flow. The
//! `http` feature adds reqwest-backed submitters for native hosts.

pub mod auth;
pub mod contact;
pub mod endpoint;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod session;
pub mod status;
pub mod submit;

pub use error::{FailureKind, SubmitError, ValidationError};
pub use status::{Form, FormCell, FormState, Phase, SubmissionStatus};
pub use submit::{Submitter, run_submission};
