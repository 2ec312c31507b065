//! User preference models: theme, AQI standard, pinned zones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Display theme. Defaults to dark.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value stored in localStorage and mirrored to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseError::Theme(other.to_string())),
        }
    }
}

/// AQI display standard. Defaults to the national (NAQI) standard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AqiStandard {
    #[default]
    India,
    Us,
}

impl AqiStandard {
    pub fn as_str(self) -> &'static str {
        match self {
            AqiStandard::India => "india",
            AqiStandard::Us => "us",
        }
    }
}

impl fmt::Display for AqiStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AqiStandard {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "india" => Ok(AqiStandard::India),
            "us" => Ok(AqiStandard::Us),
            other => Err(ParseError::Standard(other.to_string())),
        }
    }
}

/// Persisted user preferences.
///
/// The pinned list is order-preserving and duplicate-free; both invariants
/// are maintained by [`Preferences::toggle_pin`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub theme: Theme,
    pub standard: AqiStandard,
    pub pinned: Vec<String>,
}

impl Preferences {
    pub fn is_pinned(&self, zone_id: &str) -> bool {
        self.pinned.iter().any(|id| id == zone_id)
    }

    /// Pin a zone if unpinned, unpin it otherwise.
    ///
    /// Returns `true` when the zone is pinned after the call.
    pub fn toggle_pin(&mut self, zone_id: &str) -> bool {
        if self.is_pinned(zone_id) {
            self.pinned.retain(|id| id != zone_id);
            false
        } else {
            self.pinned.push(zone_id.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.standard, AqiStandard::India);
        assert!(prefs.pinned.is_empty());
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("us".parse::<AqiStandard>().unwrap(), AqiStandard::Us);
        assert!("sepia".parse::<Theme>().is_err());
        assert!("eu".parse::<AqiStandard>().is_err());
    }

    #[test]
    fn test_toggle_pin_never_duplicates() {
        let mut prefs = Preferences::default();
        assert!(prefs.toggle_pin("delhi"));
        assert!(prefs.toggle_pin("srinagar"));

        // Unpin and re-pin: still exactly one occurrence, appended at the end
        assert!(!prefs.toggle_pin("delhi"));
        assert!(prefs.toggle_pin("delhi"));
        assert_eq!(prefs.pinned, vec!["srinagar", "delhi"]);
        assert_eq!(prefs.pinned.iter().filter(|id| *id == "delhi").count(), 1);
    }

    #[test]
    fn test_toggle_pin_preserves_order() {
        let mut prefs = Preferences::default();
        for id in ["a", "b", "c"] {
            prefs.toggle_pin(id);
        }
        prefs.toggle_pin("b");
        assert_eq!(prefs.pinned, vec!["a", "c"]);
    }
}
