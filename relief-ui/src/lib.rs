//! Disaster-preparedness dashboard — Leptos CSR frontend.

mod app;
mod bridge;
mod config;
mod dto;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
