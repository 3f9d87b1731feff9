//! Error taxonomy for form validation and submission.
//!
//! DESIGN
//! ======
//! Every failure ends up as one inline message in the form's status region,
//! so `Display` on these types is the user-facing text. [`FailureKind`]
//! travels next to the message so callers can still tell the classes apart.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};

/// Shown for every request that never produced an interpretable reply.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";

/// A violated field rule. Validators stop at the first one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 3 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Failure of a submit call after validation passed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint explained the rejection; surfaced verbatim.
    #[error("{0}")]
    Rejected(String),
    /// The endpoint declined without saying why.
    #[error("{fallback}")]
    Unsuccessful { fallback: &'static str },
    /// The request failed before a usable reply arrived.
    #[error("Network error. Please try again later.")]
    Transport { detail: String },
}

impl SubmitError {
    /// Wrap any transport-level error, keeping its text for diagnostics.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport { detail: err.to_string() }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected(_) => FailureKind::Rejected,
            Self::Unsuccessful { .. } => FailureKind::Unsuccessful,
            Self::Transport { .. } => FailureKind::Transport,
        }
    }
}

/// Which class of failure produced an error status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Rejected,
    Unsuccessful,
    Transport,
}
