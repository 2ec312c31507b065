//! Map page: Leaflet base map with colored per-zone AQI markers

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vayu_types::viewmodel::{self, MarkerModel};
use vayu_types::{Preferences, Theme, Zone};

use crate::api;
use crate::app::AppState;
use crate::interop::leaflet::{self, LeafletMap, TileLayer};

// Kashmir valley overview.
const MAP_CENTER: (f64, f64) = (33.9, 75.5);
const MAP_ZOOM: f64 = 8.0;

// Leaflet instances are plain JS objects; keep them out of the reactive
// graph and tear them down explicitly on re-init.
thread_local! {
    static MAP: RefCell<Option<LeafletMap>> = const { RefCell::new(None) };
    static TILES: RefCell<Option<TileLayer>> = const { RefCell::new(None) };
}

/// Base tile source per theme.
fn tile_source(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        // lyrs=m (standard roadmap), gl=in (region: india)
        Theme::Light => (
            "https://mt1.google.com/vt/lyrs=m&x={x}&y={y}&z={z}&gl=in",
            "&copy; Google Maps",
        ),
        Theme::Dark => (
            "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png",
            "&copy; OpenStreetMap contributors &copy; CARTO",
        ),
    }
}

fn destroy_map() {
    TILES.with(|cell| cell.borrow_mut().take());
    MAP.with(|cell| {
        if let Some(map) = cell.borrow_mut().take() {
            map.remove();
        }
    });
}

fn with_map(f: impl FnOnce(&LeafletMap)) {
    MAP.with(|cell| {
        if let Some(map) = cell.borrow().as_ref() {
            f(map);
        }
    });
}

/// Swap the base tile layer to match the theme.
fn update_tiles(theme: Theme) {
    with_map(|map| {
        TILES.with(|cell| {
            if let Some(old) = cell.borrow_mut().take() {
                old.remove_layer();
            }
            let (url, attribution) = tile_source(theme);
            *cell.borrow_mut() = Some(leaflet::add_tile_layer(map, url, attribution));
        });
    });
}

/// Tear down any previous map and build a fresh one with markers.
fn init_map(zones: Vec<Zone>, prefs: Preferences) {
    destroy_map();
    let map = leaflet::create_map("map-container", MAP_CENTER, MAP_ZOOM);
    MAP.with(|cell| *cell.borrow_mut() = Some(map));
    update_tiles(prefs.theme);
    populate_markers(zones, prefs);
}

/// Fetch each mappable zone's reading and drop a colored marker for it.
///
/// Fetches are fire-and-forget; a zone whose reading fails simply gets no
/// marker, and responses arriving after the map was torn down are ignored.
fn populate_markers(zones: Vec<Zone>, prefs: Preferences) {
    for zone in zones.into_iter().filter(|z| z.coords().is_some()) {
        let prefs = prefs.clone();
        spawn_local(async move {
            let Ok(reading) = api::fetch_reading(&zone.id).await else {
                return;
            };
            let Some(marker) = viewmodel::map_marker(&zone, &reading, &prefs) else {
                return;
            };
            with_map(|map| {
                leaflet::add_marker(
                    map,
                    marker.lat,
                    marker.lon,
                    &marker_html(&marker),
                    &popup_html(&marker),
                );
            });
        });
    }
}

fn marker_html(marker: &MarkerModel) -> String {
    format!(
        r#"<div class="aqi-marker" style="background-color: {};">{}</div>"#,
        marker.hex, marker.aqi
    )
}

fn popup_html(marker: &MarkerModel) -> String {
    format!(
        r#"<div class="aqi-popup">
            <h3>{}</h3>
            <div class="popup-aqi">{} AQI</div>
            <small>Primary: {}</small>
        </div>"#,
        marker.name, marker.aqi, marker.pollutant_label
    )
}

#[component]
pub fn MapView() -> impl IntoView {
    let state = expect_context::<AppState>();
    let standard = Memo::new(move |_| state.prefs.get().standard);
    let theme = Memo::new(move |_| state.prefs.get().theme);

    // (Re)initialize when the view becomes active, when the catalog lands,
    // and when the standard changes (marker values and colors depend on it).
    Effect::new(move |_| {
        let zones = state.zones.get();
        let _ = standard.get();
        init_map(zones, state.prefs.get_untracked());

        // The container was hidden until now; give layout a beat to settle
        // before asking Leaflet to re-measure it.
        spawn_local(async move {
            TimeoutFuture::new(100).await;
            with_map(LeafletMap::invalidate_size);
        });
    });

    // Theme changes only swap the base tiles.
    Effect::new(move |prev: Option<()>| {
        let theme = theme.get();
        if prev.is_some() {
            update_tiles(theme);
        }
    });

    on_cleanup(destroy_map);

    view! {
        <div class="page map-page">
            <div id="map-container" class="map-container"></div>
        </div>
    }
}
