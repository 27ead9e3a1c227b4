//! # page
//!
//! Leptos + WASM host for the invitation page's detail image viewer.
//!
//! The `viewer` crate owns the gesture and overlay logic; this crate supplies
//! the browser side of the contract: page scroll and scroll lock over
//! `web-sys`, DOM event mapping, the gesture config override, and the
//! `DetailViewer` component that renders the overlay. Everything touching the
//! DOM is gated behind the `csr` feature so the crate also builds and tests
//! natively.

pub mod app;
pub mod components;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("page: logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
