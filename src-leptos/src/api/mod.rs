//! HTTP API bindings for the Vayu readings service.
//!
//! Thin type-safe wrappers over the browser fetch API. Failures come back as
//! `Err(String)`; callers drop the affected zone from rendering rather than
//! surfacing an error (readings are best-effort by design).

mod zones;

pub use zones::{fetch_reading, fetch_zones};

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const API_BASE: &str = "/api";

/// GET an endpoint and deserialize its JSON body.
pub async fn get_json<R: DeserializeOwned>(endpoint: &str) -> Result<R, String> {
    let url = format!("{}{}", API_BASE, endpoint);

    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("Failed to set headers: {:?}", e))?;

    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response")?;

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| format!("JSON parse failed: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("JSON future failed: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Deserialize failed: {}", e))
}
