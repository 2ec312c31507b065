//! Renderable descriptions derived from domain entities plus preferences.
//!
//! These are pure functions from `(entity, Preferences)` to plain structs the
//! frontend maps into markup. Keeping them DOM-free lets every display rule
//! be unit-tested without a browser.

use chrono::DateTime;

use crate::aqi::{band_color, cigarette_equivalent, compute_trend, display_aqi, Trend};
use crate::models::{AqiReading, AqiStandard, Preferences, Provider, Zone, POLLUTANT_TABLE};

/// A dashboard card for a pinned zone.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub zone_id: String,
    pub name: String,
    pub pollutant_label: String,
    pub aqi: i64,
    pub badge_class: &'static str,
}

pub fn dashboard_card(zone: &Zone, reading: &AqiReading, prefs: &Preferences) -> CardModel {
    let aqi = display_aqi(reading, prefs.standard);
    CardModel {
        zone_id: zone.id.clone(),
        name: zone.name.clone(),
        pollutant_label: reading.main_pollutant.to_uppercase(),
        aqi,
        badge_class: band_color(aqi, prefs.standard, prefs.theme).css_class,
    }
}

/// One row in the explore list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreRow {
    pub zone_id: String,
    pub name: String,
    pub provider_label: &'static str,
    pub pinned: bool,
}

pub fn explore_row(zone: &Zone, prefs: &Preferences) -> ExploreRow {
    ExploreRow {
        zone_id: zone.id.clone(),
        name: zone.name.clone(),
        provider_label: zone.provider().label(),
        pinned: prefs.is_pinned(&zone.id),
    }
}

/// Resolve pinned ids against the catalog, preserving pin order.
///
/// Ids with no catalog entry are dropped, never surfaced as errors.
pub fn pinned_zones(zones: &[Zone], pinned: &[String]) -> Vec<Zone> {
    pinned
        .iter()
        .filter_map(|id| zones.iter().find(|z| &z.id == id).cloned())
        .collect()
}

/// Case-insensitive substring filter over the zone catalog.
pub fn filter_zones<'a>(zones: &'a [Zone], query: &str) -> Vec<&'a Zone> {
    let needle = query.to_lowercase();
    zones.iter().filter(|z| z.name.to_lowercase().contains(&needle)).collect()
}

/// A colored map marker for a zone with known coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerModel {
    pub zone_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub aqi: i64,
    pub hex: &'static str,
    pub pollutant_label: String,
}

/// Build a marker, or `None` for zones without coordinates.
pub fn map_marker(zone: &Zone, reading: &AqiReading, prefs: &Preferences) -> Option<MarkerModel> {
    let (lat, lon) = zone.coords()?;
    let aqi = display_aqi(reading, prefs.standard);
    Some(MarkerModel {
        zone_id: zone.id.clone(),
        name: zone.name.clone(),
        lat,
        lon,
        aqi,
        hex: band_color(aqi, prefs.standard, prefs.theme).hex,
        pollutant_label: reading.main_pollutant.to_uppercase(),
    })
}

/// One cell of the pollutant grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PollutantCell {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Historical series for the detail chart, sorted by timestamp.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// Everything the detail view shows for a zone.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    pub name: String,
    pub aqi: i64,
    pub hex: &'static str,
    pub primary_label: String,
    pub trend: Option<Trend>,
    pub updated_mins_ago: i64,
    pub cigarettes: Option<f64>,
    pub pollutants: Vec<PollutantCell>,
    pub chart: ChartSeries,
    pub provider: Provider,
}

/// Build the detail view model. `now_unix` is passed in so the "updated N
/// min ago" line stays deterministic under test.
pub fn detail_view(
    zone: &Zone,
    reading: &AqiReading,
    prefs: &Preferences,
    now_unix: i64,
) -> DetailModel {
    let aqi = display_aqi(reading, prefs.standard);
    DetailModel {
        name: zone.name.clone(),
        aqi,
        hex: band_color(aqi, prefs.standard, prefs.theme).hex,
        primary_label: format!("Primary: {}", reading.main_pollutant.to_uppercase()),
        trend: compute_trend(aqi, reading.timestamp_unix, &reading.history, prefs.standard),
        updated_mins_ago: (now_unix - reading.timestamp_unix) / 60,
        cigarettes: reading.pm25().and_then(cigarette_equivalent),
        pollutants: pollutant_grid(reading),
        chart: chart_series(reading, prefs.standard),
        provider: zone.provider(),
    }
}

/// Pollutant cells in fixed table order; absent concentrations are skipped.
pub fn pollutant_grid(reading: &AqiReading) -> Vec<PollutantCell> {
    POLLUTANT_TABLE
        .iter()
        .filter_map(|&(key, label, unit)| {
            reading
                .concentrations_us_units
                .get(key)
                .map(|&value| PollutantCell { label, value, unit })
        })
        .collect()
}

/// History sorted ascending, with whole-hour labels.
pub fn chart_series(reading: &AqiReading, standard: AqiStandard) -> ChartSeries {
    let mut history = reading.history.clone();
    history.sort_by_key(|h| h.ts);

    let labels = history.iter().map(|h| hour_label(h.ts)).collect();
    let values = history
        .iter()
        .map(|h| match standard {
            AqiStandard::India => h.aqi,
            AqiStandard::Us => h.us_aqi.unwrap_or(0),
        })
        .collect();
    ChartSeries { labels, values }
}

/// Label a timestamp with its hour, e.g. `"14:00"`.
pub fn hour_label(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%H:00").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HistoryEntry, Theme};

    fn zone() -> Zone {
        Zone {
            id: "srinagar".to_string(),
            name: "Srinagar".to_string(),
            lat: Some(34.08),
            lon: Some(74.8),
            provider: None,
        }
    }

    fn reading() -> AqiReading {
        AqiReading {
            aqi: 182,
            us_aqi: Some(121),
            main_pollutant: "pm2_5".to_string(),
            concentrations_us_units: [("pm2_5".to_string(), 66.0), ("o3".to_string(), 41.2)]
                .into_iter()
                .collect(),
            timestamp_unix: 1_755_900_000,
            history: vec![
                HistoryEntry { ts: 1_755_896_400, aqi: 170, us_aqi: Some(115) },
                HistoryEntry { ts: 1_755_892_800, aqi: 160, us_aqi: Some(110) },
            ],
        }
    }

    #[test]
    fn test_dashboard_card_follows_standard() {
        let mut prefs = Preferences::default();
        let card = dashboard_card(&zone(), &reading(), &prefs);
        assert_eq!(card.aqi, 182);
        assert_eq!(card.badge_class, "bg-moderate");
        assert_eq!(card.pollutant_label, "PM2_5");

        prefs.standard = AqiStandard::Us;
        let card = dashboard_card(&zone(), &reading(), &prefs);
        assert_eq!(card.aqi, 121);
        assert_eq!(card.badge_class, "bg-poor");
    }

    #[test]
    fn test_pinned_zones_drops_unknown_ids() {
        let zones = vec![zone()];
        let pinned = vec!["ghost".to_string(), "srinagar".to_string()];
        let resolved = pinned_zones(&zones, &pinned);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "srinagar");
    }

    #[test]
    fn test_filter_zones_case_insensitive() {
        let zones = vec![
            zone(),
            Zone { id: "delhi".to_string(), name: "New Delhi".to_string(), lat: None, lon: None, provider: None },
        ];
        let hits = filter_zones(&zones, "DEL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "delhi");
        assert_eq!(filter_zones(&zones, "").len(), 2);
    }

    #[test]
    fn test_marker_requires_coords() {
        let prefs = Preferences::default();
        let mut z = zone();
        assert!(map_marker(&z, &reading(), &prefs).is_some());

        z.lat = None;
        assert_eq!(map_marker(&z, &reading(), &prefs), None);
    }

    #[test]
    fn test_marker_color_resolves_theme_palette() {
        let prefs = Preferences { theme: Theme::Light, ..Default::default() };
        let marker = map_marker(&zone(), &reading(), &prefs).unwrap();
        assert_eq!(marker.hex, "#E6C200"); // moderate, light palette
    }

    #[test]
    fn test_detail_view_composition() {
        let prefs = Preferences::default();
        let now = 1_755_900_000 + 600;
        let detail = detail_view(&zone(), &reading(), &prefs, now);

        assert_eq!(detail.updated_mins_ago, 10);
        assert_eq!(detail.primary_label, "Primary: PM2_5");
        assert_eq!(detail.cigarettes, Some(3.0));
        assert_eq!(detail.provider, Provider::OpenMeteo);

        // 1h-ago entry exists exactly on the mark: 182 - 170 = +12
        let trend = detail.trend.unwrap();
        assert_eq!(trend.delta, 12);

        // Grid skips absent pollutants and keeps table order
        let labels: Vec<_> = detail.pollutants.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["PM2.5", "O₃"]);
    }

    #[test]
    fn test_chart_series_sorted_ascending() {
        let series = chart_series(&reading(), AqiStandard::India);
        assert_eq!(series.values, vec![160, 170]);
        assert_eq!(series.labels.len(), 2);

        let us = chart_series(&reading(), AqiStandard::Us);
        assert_eq!(us.values, vec![110, 115]);
    }

    #[test]
    fn test_hour_label() {
        // 2025-08-22 21:00:00 UTC
        assert_eq!(hour_label(1_755_896_400), "21:00");
    }
}
