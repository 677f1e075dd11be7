//! # gatekeeper
//!
//! Leptos + WASM client scaffold: a persisted session store, a typed client
//! for the backend's auth and user endpoints, and a route guard that keeps
//! unauthenticated visitors out of protected pages.
//!
//! Browser-only code is gated behind the `csr` feature. Without it the crate
//! builds natively and every piece of pure logic is testable with
//! `cargo test`.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
