//! AQI classification and display computations.
//!
//! Everything here is pure: the same inputs always map to the same band,
//! color, trend, or estimate, with no side effects.

mod exposure;
mod trend;

pub use exposure::{cigarette_equivalent, CIGARETTE_PM25_RATIO};
pub use trend::{compute_trend, Trend, TrendDirection, TREND_TOLERANCE_SECS};

use crate::models::{AqiReading, AqiStandard, Theme};

/// AQI severity band.
///
/// `Satisfactory` only occurs under the national standard; `Hazardous` only
/// under the US standard. Bands are contiguous and total over all values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
    Hazardous,
}

impl Band {
    /// CSS badge class for this band.
    ///
    /// `Hazardous` reuses the severe styling; the markup only distinguishes
    /// six badge colors.
    pub fn css_class(self) -> &'static str {
        match self {
            Band::Good => "bg-good",
            Band::Satisfactory => "bg-satisfactory",
            Band::Moderate => "bg-moderate",
            Band::Poor => "bg-poor",
            Band::VeryPoor => "bg-very-poor",
            Band::Severe | Band::Hazardous => "bg-severe",
        }
    }
}

/// A classified AQI value: band, badge class, and a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandColor {
    pub band: Band,
    pub css_class: &'static str,
    pub hex: &'static str,
}

// NAQI palette, themeable. The stylesheet exposes the same values as
// --aqi-* variables; markers and chart accents need the resolved hex.
const NAQI_DARK: [&str; 6] = ["#34C759", "#A7D66B", "#F7D154", "#F2994A", "#EB5757", "#B03060"];
const NAQI_LIGHT: [&str; 6] = ["#00B050", "#92D050", "#E6C200", "#FF9900", "#FF0000", "#C00000"];

// US EPA palette, fixed regardless of theme.
const EPA: [&str; 6] = ["#00E400", "#FFFF00", "#FF7E00", "#FF0000", "#8F3F97", "#7E0023"];

/// Classify an AQI value under a standard.
///
/// Band boundaries are inclusive upper bounds: 50/100/200/300/400 for the
/// national standard, 50/100/150/200/300 for US EPA.
pub fn classify(aqi: i64, standard: AqiStandard) -> Band {
    match standard {
        AqiStandard::India => match aqi {
            v if v <= 50 => Band::Good,
            v if v <= 100 => Band::Satisfactory,
            v if v <= 200 => Band::Moderate,
            v if v <= 300 => Band::Poor,
            v if v <= 400 => Band::VeryPoor,
            _ => Band::Severe,
        },
        AqiStandard::Us => match aqi {
            v if v <= 50 => Band::Good,
            v if v <= 100 => Band::Moderate,
            v if v <= 150 => Band::Poor,
            v if v <= 200 => Band::VeryPoor,
            v if v <= 300 => Band::Severe,
            _ => Band::Hazardous,
        },
    }
}

/// Classify an AQI value and resolve its display color.
///
/// National-standard colors follow the active theme; US-standard colors are
/// the fixed EPA palette.
pub fn band_color(aqi: i64, standard: AqiStandard, theme: Theme) -> BandColor {
    let band = classify(aqi, standard);
    let hex = match standard {
        AqiStandard::India => {
            let palette = match theme {
                Theme::Dark => &NAQI_DARK,
                Theme::Light => &NAQI_LIGHT,
            };
            match band {
                Band::Good => palette[0],
                Band::Satisfactory => palette[1],
                Band::Moderate => palette[2],
                Band::Poor => palette[3],
                Band::VeryPoor => palette[4],
                Band::Severe | Band::Hazardous => palette[5],
            }
        }
        AqiStandard::Us => match band {
            Band::Good => EPA[0],
            Band::Satisfactory | Band::Moderate => EPA[1],
            Band::Poor => EPA[2],
            Band::VeryPoor => EPA[3],
            Band::Severe => EPA[4],
            Band::Hazardous => EPA[5],
        },
    };
    BandColor { band, css_class: band.css_class(), hex }
}

/// AQI value to display for a reading under the active standard.
///
/// Under the US standard a missing `us_aqi` falls back to 0, matching the
/// upstream behavior this dashboard reads from. Whether that should instead
/// hide the value is an open question recorded in DESIGN.md.
pub fn display_aqi(reading: &AqiReading, standard: AqiStandard) -> i64 {
    match standard {
        AqiStandard::India => reading.aqi,
        AqiStandard::Us => reading.us_aqi.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_inclusive_india() {
        assert_eq!(classify(0, AqiStandard::India), Band::Good);
        assert_eq!(classify(50, AqiStandard::India), Band::Good);
        assert_eq!(classify(51, AqiStandard::India), Band::Satisfactory);
        assert_eq!(classify(100, AqiStandard::India), Band::Satisfactory);
        assert_eq!(classify(101, AqiStandard::India), Band::Moderate);
        assert_eq!(classify(200, AqiStandard::India), Band::Moderate);
        assert_eq!(classify(300, AqiStandard::India), Band::Poor);
        assert_eq!(classify(400, AqiStandard::India), Band::VeryPoor);
        assert_eq!(classify(401, AqiStandard::India), Band::Severe);
        assert_eq!(classify(999, AqiStandard::India), Band::Severe);
    }

    #[test]
    fn test_boundaries_inclusive_us() {
        assert_eq!(classify(50, AqiStandard::Us), Band::Good);
        assert_eq!(classify(51, AqiStandard::Us), Band::Moderate);
        assert_eq!(classify(100, AqiStandard::Us), Band::Moderate);
        assert_eq!(classify(150, AqiStandard::Us), Band::Poor);
        assert_eq!(classify(200, AqiStandard::Us), Band::VeryPoor);
        assert_eq!(classify(300, AqiStandard::Us), Band::Severe);
        assert_eq!(classify(301, AqiStandard::Us), Band::Hazardous);
    }

    #[test]
    fn test_bands_total_and_single() {
        // Every value maps to exactly one band under both standards.
        for v in 0..600 {
            let _ = classify(v, AqiStandard::India);
            let _ = classify(v, AqiStandard::Us);
        }
    }

    #[test]
    fn test_us_colors_ignore_theme() {
        let dark = band_color(175, AqiStandard::Us, Theme::Dark);
        let light = band_color(175, AqiStandard::Us, Theme::Light);
        assert_eq!(dark.hex, "#FF0000");
        assert_eq!(dark.hex, light.hex);
    }

    #[test]
    fn test_india_colors_follow_theme() {
        let dark = band_color(42, AqiStandard::India, Theme::Dark);
        let light = band_color(42, AqiStandard::India, Theme::Light);
        assert_eq!(dark.band, Band::Good);
        assert_eq!(light.band, Band::Good);
        assert_ne!(dark.hex, light.hex);
    }

    #[test]
    fn test_hazardous_reuses_severe_class() {
        let top = band_color(500, AqiStandard::Us, Theme::Dark);
        assert_eq!(top.band, Band::Hazardous);
        assert_eq!(top.css_class, "bg-severe");
        assert_eq!(top.hex, "#7E0023");
    }

    #[test]
    fn test_display_aqi_us_fallback_to_zero() {
        let reading = AqiReading {
            aqi: 50,
            us_aqi: None,
            main_pollutant: "pm2_5".to_string(),
            concentrations_us_units: Default::default(),
            timestamp_unix: 0,
            history: vec![],
        };
        assert_eq!(display_aqi(&reading, AqiStandard::India), 50);
        // Unset us_aqi displays 0 under the US standard.
        assert_eq!(display_aqi(&reading, AqiStandard::Us), 0);
    }
}
