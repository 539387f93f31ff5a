//! # authform
//!
//! Leptos + WASM dual-mode authentication form: one card that switches
//! between a login view and a register view and keeps the values of both.
//!
//! This crate contains the page, its components, the form state machine, and
//! the input constraint checks. The authentication backend is not part of it;
//! the form hands each accepted submission to a caller-supplied callback.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
