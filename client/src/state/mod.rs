//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only app-wide state and is provided through context.
//! Form state is component-local; `form` adapts it to the `forms` crate.

pub mod form;
pub mod session;
