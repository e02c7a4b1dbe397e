//! Browser client for the school administration console.
//!
//! ARCHITECTURE
//! ============
//! `app` wires contexts and routes; `pages` own route-level orchestration;
//! `components` render shared chrome (the auth gate lives there); `state`
//! holds plain, natively-testable logic structs; `net` talks to the hosted
//! credential provider and document store; `util` isolates small shared
//! helpers.
//!
//! All browser-only code is gated behind the `csr` feature so the logic
//! layer compiles and tests on the native target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(|| leptos::view! { <crate::app::App/> });
}
