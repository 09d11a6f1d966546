//! Open Fiesta - landing page for the multi-model AI chat platform
//!
//! Server-rendered with Leptos and hydrated in the browser through WebAssembly.
//! The wheel-driven feature carousel lives in [`core::carousel`] (pure state
//! machine) and [`ui::scroll_cards`] (browser wiring).

#![recursion_limit = "4096"]

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
