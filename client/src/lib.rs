//! # farmtech-client
//!
//! Leptos + WASM frontend for the FarmTech livestock dashboard.
//!
//! This crate contains the session store, route gate, REST auth gateway,
//! pages and components. The `hydrate` feature builds the browser bundle; the
//! `ssr` feature renders the shell for the `server` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
