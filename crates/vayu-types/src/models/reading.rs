//! Per-zone air-quality reading models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sparse pollutant concentration map keyed by pollutant id (e.g. `pm2_5`).
///
/// Absent keys are simply not displayed.
pub type Pollutants = HashMap<String, f64>;

/// Display table for the pollutant grid: (key, label, unit).
///
/// Order is fixed so the grid layout is stable regardless of map iteration
/// order; keys missing from a reading are skipped.
pub const POLLUTANT_TABLE: &[(&str, &str, &str)] = &[
    ("pm2_5", "PM2.5", "µg/m³"),
    ("co", "CO", "mg/m³"),
    ("pm10", "PM10", "µg/m³"),
    ("so2", "SO₂", "µg/m³"),
    ("no2", "NO₂", "µg/m³"),
    ("o3", "O₃", "µg/m³"),
];

/// A zone's current reading plus its recent history.
///
/// Re-fetched whenever a zone is displayed; never cached across views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AqiReading {
    /// National-standard (NAQI) AQI value
    pub aqi: i64,
    /// US EPA AQI value, when the upstream provides one
    #[serde(default)]
    pub us_aqi: Option<i64>,
    /// Pollutant most responsible for the current AQI
    pub main_pollutant: String,
    /// Concentrations in US units, keyed by pollutant id
    #[serde(default)]
    pub concentrations_us_units: Pollutants,
    /// Unix timestamp (seconds) of the current reading
    pub timestamp_unix: i64,
    /// Prior readings, used for trend computation and the chart
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl AqiReading {
    /// PM2.5 concentration, when reported.
    pub fn pm25(&self) -> Option<f64> {
        self.concentrations_us_units.get("pm2_5").copied()
    }
}

/// A single historical reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Unix timestamp (seconds) of the entry
    pub ts: i64,
    /// National-standard AQI at that time
    pub aqi: i64,
    /// US EPA AQI at that time, when available
    #[serde(default)]
    pub us_aqi: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_deserializes_sparse_fields() {
        let json = r#"{
            "aqi": 182,
            "main_pollutant": "pm2_5",
            "timestamp_unix": 1755900000,
            "concentrations_us_units": {"pm2_5": 66.0, "o3": 41.2}
        }"#;
        let reading: AqiReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.us_aqi, None);
        assert!(reading.history.is_empty());
        assert_eq!(reading.pm25(), Some(66.0));
        assert_eq!(reading.concentrations_us_units.get("co"), None);
    }

    #[test]
    fn test_pollutant_table_covers_known_keys() {
        let keys: Vec<&str> = POLLUTANT_TABLE.iter().map(|(k, _, _)| *k).collect();
        assert_eq!(keys, vec!["pm2_5", "co", "pm10", "so2", "no2", "o3"]);
    }
}
