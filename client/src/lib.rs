//! # landing-client
//!
//! Leptos + WASM frontend for the Computer Anything landing site.
//!
//! This crate contains the landing page, its session validation and overlay
//! orchestration, the login/register forms, and the REST helpers they rely
//! on. The `server` crate renders it with feature `ssr`; the browser bundle
//! is built with feature `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
