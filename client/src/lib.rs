//! # client
//!
//! Leptos + WASM frontend for GlassesOn account management: registration,
//! login, silent session renewal and sign out against the auth REST backend.
//!
//! This crate contains pages, components, client-side state, form
//! validation, the REST client, and the session service that ties them
//! together.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
