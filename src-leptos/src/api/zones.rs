//! Zone catalog and per-zone reading endpoints.

use vayu_types::{AqiReading, Zone};

use super::get_json;

/// Fetch the full zone catalog. Called once per session.
pub async fn fetch_zones() -> Result<Vec<Zone>, String> {
    get_json("/zones").await
}

/// Fetch the current reading (plus history) for one zone.
pub async fn fetch_reading(zone_id: &str) -> Result<AqiReading, String> {
    get_json(&format!("/zones/{}/aqi", zone_id)).await
}
