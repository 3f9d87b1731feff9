//! Reactive adapter between Leptos signals and the `forms` state machine.

use forms::{Form, FormCell, FormState};
use leptos::prelude::*;

/// A component's form state, usable by [`forms::run_submission`].
///
/// Once the owning component is disposed the signal is gone and the
/// in-flight reply is dropped.
pub struct SignalForm<F: Send + Sync + 'static>(pub RwSignal<FormState<F>>);

impl<F> FormCell<F> for SignalForm<F>
where
    F: Form + Send + Sync + 'static,
{
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
