//! # client
//!
//! Leptos + WASM frontend for the WebCraft Studio portfolio site.
//!
//! This crate contains the page shell, the presentation sections, the contact
//! form, the sign-in / sign-up modal, and the browser glue (gloo-net
//! submitters, `localStorage` session backend). Form rules and state live in
//! the `forms` crate so the server can re-check submissions with the same code.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
