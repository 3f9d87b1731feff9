//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and the two forms. Form components
//! own their state locally and report upward only through callbacks.

pub mod auth_modal;
pub mod contact_section;
pub mod navigation;
pub mod sections;
pub mod status_banner;
