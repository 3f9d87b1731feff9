//! Per-form status state machine.
//!
//! DESIGN
//! ======
//! A form instance moves through `Idle -> Submitting -> Success | Error`.
//! `submitting` is the only concurrency guard: while it is set, further
//! submit attempts are no-ops. Nothing is queued and nothing is cancelled.
//!
//! The `generation` counter is bumped whenever the form is reset (modal
//! reopened, auth mode switched). A reply that arrives for an older
//! generation is dropped instead of overwriting the fresh form.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::cell::RefCell;

use crate::error::{FailureKind, SubmitError, ValidationError};

/// Field state that knows how to validate itself and react to acceptance.
pub trait Form {
    /// Typed payload handed to the submitter once validation passes.
    type Input;

    /// Check the current fields, returning the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns the highest-priority [`ValidationError`] for the fields.
    fn validate(&self) -> Result<Self::Input, ValidationError>;

    /// Apply the post-success field policy and return the success message.
    fn accepted(&mut self, input: &Self::Input) -> String;
}

/// What the status region shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error { kind: FailureKind, message: String },
}

impl SubmissionStatus {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Success(message) | Self::Error { message, .. } => Some(message),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Coarse view of the machine, including the in-flight state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Ticket for an accepted submit attempt.
#[derive(Debug)]
pub struct Pending<I> {
    pub input: I,
    generation: u64,
}

/// Fields, status and guard for one mounted form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState<F> {
    pub fields: F,
    pub status: SubmissionStatus,
    submitting: bool,
    generation: u64,
}

impl<F: Form> FormState<F> {
    #[must_use]
    pub fn new(fields: F) -> Self {
        Self { fields, status: SubmissionStatus::Idle, submitting: false, generation: 0 }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.submitting {
            return Phase::Submitting;
        }
        match self.status {
            SubmissionStatus::Idle => Phase::Idle,
            SubmissionStatus::Success(_) => Phase::Success,
            SubmissionStatus::Error { .. } => Phase::Error,
        }
    }

    /// Reset counter. Work scheduled after a reply can compare it later to
    /// tell whether the form was reset in between.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the fields and return to `Idle`, orphaning any in-flight reply.
    pub fn reset_with(&mut self, fields: F) {
        self.fields = fields;
        self.status = SubmissionStatus::Idle;
        self.submitting = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Mutate the fields. The current status is left as it is.
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.fields);
    }

    /// Start a submit attempt.
    ///
    /// Returns `None` when a request is already outstanding, or when
    /// validation fails (the status then carries the validation message).
    pub fn begin_submit(&mut self) -> Option<Pending<F::Input>> {
        if self.submitting {
            return None;
        }
        match self.fields.validate() {
            Ok(input) => {
                self.submitting = true;
                self.status = SubmissionStatus::Idle;
                Some(Pending { input, generation: self.generation })
            }
            Err(err) => {
                self.status = SubmissionStatus::Error { kind: FailureKind::Validation, message: err.to_string() };
                None
            }
        }
    }

    /// Record the outcome of a submit attempt started by [`Self::begin_submit`].
    ///
    /// Returns the success payload, or `None` on failure or for a stale ticket.
    pub fn finish_submit<O>(&mut self, pending: Pending<F::Input>, outcome: Result<O, SubmitError>) -> Option<O> {
        if pending.generation != self.generation {
            return None;
        }
        self.submitting = false;
        match outcome {
            Ok(payload) => {
                self.status = SubmissionStatus::Success(self.fields.accepted(&pending.input));
                Some(payload)
            }
            Err(err) => {
                self.status = SubmissionStatus::Error { kind: err.kind(), message: err.to_string() };
                None
            }
        }
    }
}

/// Shared handle to a live [`FormState`].
///
/// Returns `None` when the form has gone away (e.g. the component unmounted
/// while a request was in flight).
pub trait FormCell<F: Form> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R>;
}

impl<F: Form> FormCell<F> for RefCell<FormState<F>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
