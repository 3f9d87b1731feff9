//! Inline status region shared by both forms.

#[cfg(test)]
#[path = "status_banner_test.rs"]
mod status_banner_test;

use forms::SubmissionStatus;
use leptos::prelude::*;

/// CSS modifier for the current status; `None` hides the banner.
#[must_use]
pub fn banner_class(status: &SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Success(_) => Some("status-banner status-banner--success"),
        SubmissionStatus::Error { .. } => Some("status-banner status-banner--error"),
    }
}

/// Shows the latest success or error message, replacing any earlier one.
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<SubmissionStatus>) -> impl IntoView {
    move || {
        let status = status.get();
        banner_class(&status).map(|class| {
            let icon = if status.is_success() { "✓" } else { "!" };
            let message = status.message().unwrap_or_default().to_owned();
            view! {
                <div class=class role="status">
                    <span class="status-banner__icon">{icon}</span>
                    <span class="status-banner__message">{message}</span>
                </div>
            }
        })
    }
}
