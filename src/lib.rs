//! # seogaeum-client
//!
//! Leptos + WASM frontend for the Seogaeum book-discovery application.
//!
//! This crate holds the route table, the navigation gate that keeps
//! signed-in readers out of the login/signup flow, the browser adapters the
//! gate reads through, and the route-level pages.

pub mod app;
pub mod components;
pub mod config;
pub mod gate;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs panic and console logging hooks, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
