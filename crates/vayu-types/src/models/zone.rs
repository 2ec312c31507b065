//! Zone catalog models.

use serde::{Deserialize, Serialize};

/// A monitored zone from the catalog.
///
/// The full catalog is fetched once per session and treated as immutable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    /// Stable zone identifier used for pinning and reading lookups
    pub id: String,
    /// Human-readable display name
    pub name: String,
    /// Latitude, when the zone is mappable
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, when the zone is mappable
    #[serde(default)]
    pub lon: Option<f64>,
    /// Upstream data provider label (defaults to Open-Meteo when absent)
    #[serde(default)]
    pub provider: Option<String>,
}

impl Zone {
    /// Coordinates as a pair, if both are present.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Resolve the data provider for this zone.
    pub fn provider(&self) -> Provider {
        match self.provider.as_deref() {
            Some("openaq") => Provider::OpenAq,
            _ => Provider::OpenMeteo,
        }
    }
}

/// Upstream data providers we attribute readings to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// open-meteo.com air quality API (default)
    OpenMeteo,
    /// openaq.org community sensors
    OpenAq,
}

impl Provider {
    /// Label shown in explore rows and the detail attribution block.
    pub fn label(self) -> &'static str {
        match self {
            Provider::OpenMeteo => "openmeteo",
            Provider::OpenAq => "openaq",
        }
    }

    /// Homepage linked from the detail attribution block.
    pub fn homepage(self) -> &'static str {
        match self {
            Provider::OpenMeteo => "https://open-meteo.com",
            Provider::OpenAq => "https://openaq.org",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_requires_both() {
        let mut zone = Zone {
            id: "srinagar".to_string(),
            name: "Srinagar".to_string(),
            lat: Some(34.08),
            lon: None,
            provider: None,
        };
        assert_eq!(zone.coords(), None);

        zone.lon = Some(74.8);
        assert_eq!(zone.coords(), Some((34.08, 74.8)));
    }

    #[test]
    fn test_provider_defaults_to_openmeteo() {
        let zone: Zone = serde_json::from_str(r#"{"id":"z1","name":"Zone 1"}"#).unwrap();
        assert_eq!(zone.provider(), Provider::OpenMeteo);

        let zone: Zone =
            serde_json::from_str(r#"{"id":"z2","name":"Zone 2","provider":"openaq"}"#).unwrap();
        assert_eq!(zone.provider(), Provider::OpenAq);
    }
}
