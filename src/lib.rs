//! Seven The Hair and Beauty Salon - marketing site
//!
//! A single-page salon website with a gallery lightbox, a mailto-based
//! consultation form and an embedded map, built with Leptos and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
