//! Persisted session for the signed-in visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth endpoints hand back an opaque user object. The store keeps the
//! current one in memory and mirrors it into a key-value slot so it survives
//! page reloads. Components receive the store through context; nothing else
//! touches the storage slot.
//!
//! TRADE-OFFS
//! ==========
//! The slot holds plain JSON. It is a convenience cache, not a credential.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Storage key of the persisted user.
pub const SESSION_KEY: &str = "user";

/// User object returned by the auth endpoints. Its shape is not ours.
/// Defaults to `null`, for endpoints that accept a request without echoing
/// a user back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Value);

impl User {
    /// The `name` member, if the object has one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.0.get("name").and_then(serde_json::Value::as_str)
    }
}

/// String key-value slots (browser `localStorage` or an in-memory map).
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

/// Current user plus its persisted mirror.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
    user: Option<User>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Rehydrate from `storage`. A slot that no longer parses is dropped.
    pub fn init(mut storage: S) -> Self {
        let user = match storage.get(SESSION_KEY) {
            None => None,
            Some(raw) => match serde_json::from_str::<Option<User>>(&raw) {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable persisted session");
                    storage.remove(SESSION_KEY);
                    None
                }
            },
        };
        Self { storage, user }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(SESSION_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "session not persisted"),
        }
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.storage.remove(SESSION_KEY);
        self.user = None;
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
