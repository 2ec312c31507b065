//! Vayu - Leptos Frontend
//!
//! Client-side rendered dashboard over the Vayu air-quality API. The map and
//! chart widgets are the CDN-loaded Leaflet and Chart.js globals, driven
//! through wasm-bindgen externs.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use chrono as _;
use futures as _;
use gloo_timers as _;
use js_sys as _;
use leptos_router as _;
use serde as _;
use serde_json as _;
use serde_wasm_bindgen as _;
use vayu_types as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use leptos::prelude::*;
use vayu_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Vayu dashboard (Leptos) starting...");

    // Mount the app
    mount_to_body(App);
}
