//! # contact-client
//!
//! Leptos frontend for the contact site: the home and contact pages, the
//! navigation and form components they compose, and the HTTP bridge to the
//! server-side contact action.
//!
//! Built twice: with `ssr` for server rendering inside `contact-server`, and
//! with `hydrate` as the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
