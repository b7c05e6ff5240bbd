//! # portal-client
//!
//! Leptos + WASM frontend for the company portal page: an auto-rotating
//! image carousel beside a toggle between a remotely loaded company table
//! and a static registration form.
//!
//! The crate renders on the server under the `ssr` feature and hydrates in
//! the browser under `hydrate`. Browser-only work (timers, the company
//! fetch, console logging) is compiled in only for `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
