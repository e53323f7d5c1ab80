//! # orderer-console
//!
//! Leptos + WASM operations console for ordering-service channel
//! participation. Replaces the React console's channel-participation views
//! with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the REST
//! wrappers used to talk to the console backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
