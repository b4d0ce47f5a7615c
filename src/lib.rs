//! # marketfront
//!
//! Leptos + WASM front-end for the marketplace authentication flows:
//! registration and login for general users (email identifier) and vendors
//! (phone identifier), a localStorage-backed session, and a token-presence
//! route guard in front of the protected root.
//!
//! The backend is reached only through the thin client in [`net::api`];
//! everything else is forms, validation, and session plumbing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
