//! Session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation reads it to show the visitor's name; the home page writes it
//! when the auth modal succeeds or the visitor signs out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use forms::session::{SessionStore, User};
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

/// Session store backed by browser `localStorage`.
pub type Session = SessionStore<BrowserStorage>;

/// Replace the store with one rehydrated from persisted storage.
pub fn rehydrate_session(session: RwSignal<Session>) {
    session.set(Session::init(BrowserStorage));
}

/// Name shown in the navigation bar for a signed-in user.
#[must_use]
pub fn nav_label(user: Option<&User>) -> String {
    match user {
        Some(user) => user.display_name().unwrap_or("Profile").to_owned(),
        None => "Sign In".to_owned(),
    }
}
