//! Minimal bindings to the global Leaflet `L` object.
//!
//! Only the surface the map view needs: map lifecycle, one raster tile
//! layer, and colored div-icon markers with popups.

use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn l_map(container_id: &str, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn l_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn layer_add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_layer(this: &TileLayer);

    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn l_div_icon(options: &JsValue) -> DivIcon;

    pub type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn l_marker(latlng: &JsValue, options: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn marker_add_to(this: &LeafletMarker, map: &LeafletMap) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn marker_bind_popup(this: &LeafletMarker, html: &str) -> LeafletMarker;
}

// Plain-object serialization; the default serializer would emit ES Maps,
// which Leaflet's option handling does not accept.
fn to_js(value: &serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::UNDEFINED)
}

/// Create a map in the given container, centered and zoomed.
pub fn create_map(container_id: &str, center: (f64, f64), zoom: f64) -> LeafletMap {
    let map = l_map(container_id, &to_js(&json!({ "zoomControl": false })));
    map.set_view(&to_js(&json!([center.0, center.1])), zoom);
    map
}

/// Add a raster tile layer to the map.
pub fn add_tile_layer(map: &LeafletMap, url_template: &str, attribution: &str) -> TileLayer {
    let layer = l_tile_layer(
        url_template,
        &to_js(&json!({ "attribution": attribution, "maxZoom": 20 })),
    );
    layer.layer_add_to(map)
}

/// Drop a div-icon marker with a popup onto the map.
pub fn add_marker(
    map: &LeafletMap,
    lat: f64,
    lon: f64,
    icon_html: &str,
    popup_html: &str,
) -> LeafletMarker {
    let icon = l_div_icon(&to_js(&json!({
        "html": icon_html,
        "className": "custom-pin",
        "iconSize": [30, 30],
        "iconAnchor": [15, 15],
    })));

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("icon"), &icon);

    l_marker(&to_js(&json!([lat, lon])), &options)
        .marker_add_to(map)
        .marker_bind_popup(popup_html)
}
