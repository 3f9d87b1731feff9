//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the browser submitters for the contact endpoint and the auth
//! endpoints. Wire bodies and reply rules live in the `forms` crate.

pub mod api;
