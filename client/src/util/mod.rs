//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrappers over browser APIs that have no server-side equivalent. Builds
//! without the `hydrate` feature get inert versions.

pub mod storage;
pub mod timer;
