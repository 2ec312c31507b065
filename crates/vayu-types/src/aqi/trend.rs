//! One-hour trend computation over reading history.

use crate::models::{AqiStandard, HistoryEntry};

/// How far a history entry may sit from the 1h-ago mark and still count.
pub const TREND_TOLERANCE_SECS: i64 = 1800;

/// Direction of the one-hour trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// A computed one-hour trend: direction plus the signed AQI delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub delta: i64,
}

impl Trend {
    /// CSS class for the trend badge.
    pub fn css_class(self) -> &'static str {
        match self.direction {
            TrendDirection::Up => "trend-up",
            TrendDirection::Down => "trend-down",
            TrendDirection::Neutral => "trend-neutral",
        }
    }

    /// Display label, e.g. `"▲ +12 (1h)"` or `"-- (1h)"`.
    pub fn label(self) -> String {
        match self.direction {
            TrendDirection::Neutral => "-- (1h)".to_string(),
            TrendDirection::Up => format!("▲ +{} (1h)", self.delta),
            TrendDirection::Down => format!("▼ {} (1h)", self.delta),
        }
    }
}

/// Compare the current AQI to the history entry closest to one hour ago.
///
/// Only entries within [`TREND_TOLERANCE_SECS`] of the 1h-ago mark qualify;
/// with no qualifying entry there is no trend to show. The history value is
/// selected under the active standard, like the current value.
pub fn compute_trend(
    current_aqi: i64,
    current_ts: i64,
    history: &[HistoryEntry],
    standard: AqiStandard,
) -> Option<Trend> {
    let one_hour_ago = current_ts - 3600;

    let past = history
        .iter()
        .filter(|h| (h.ts - one_hour_ago).abs() < TREND_TOLERANCE_SECS)
        .min_by_key(|h| (h.ts - one_hour_ago).abs())?;

    let past_aqi = match standard {
        AqiStandard::India => past.aqi,
        AqiStandard::Us => past.us_aqi.unwrap_or(0),
    };

    let delta = current_aqi - past_aqi;
    let direction = match delta {
        0 => TrendDirection::Neutral,
        d if d > 0 => TrendDirection::Up,
        _ => TrendDirection::Down,
    };
    Some(Trend { direction, delta })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_755_900_000;

    fn entry(ts: i64, aqi: i64) -> HistoryEntry {
        HistoryEntry { ts, aqi, us_aqi: Some(aqi / 2) }
    }

    #[test]
    fn test_no_trend_on_empty_history() {
        assert_eq!(compute_trend(100, NOW, &[], AqiStandard::India), None);
    }

    #[test]
    fn test_no_trend_outside_tolerance() {
        // 31 minutes off the 1h-ago mark: excluded.
        let history = vec![entry(NOW - 3600 - 1860, 80)];
        assert_eq!(compute_trend(100, NOW, &history, AqiStandard::India), None);
    }

    #[test]
    fn test_picks_entry_closest_to_one_hour_ago() {
        let history = vec![
            entry(NOW - 3600 - 1200, 200), // 20 min early
            entry(NOW - 3600 + 300, 90),   // 5 min late, closest
            entry(NOW - 3600 - 600, 150),  // 10 min early
        ];
        let trend = compute_trend(100, NOW, &history, AqiStandard::India).unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.delta, 10);
    }

    #[test]
    fn test_neutral_and_down() {
        let history = vec![entry(NOW - 3600, 100)];
        let trend = compute_trend(100, NOW, &history, AqiStandard::India).unwrap();
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.label(), "-- (1h)");

        let trend = compute_trend(88, NOW, &history, AqiStandard::India).unwrap();
        assert_eq!(trend.direction, TrendDirection::Down);
        assert_eq!(trend.label(), "▼ -12 (1h)");
    }

    #[test]
    fn test_up_label_carries_sign() {
        let history = vec![entry(NOW - 3600, 88)];
        let trend = compute_trend(100, NOW, &history, AqiStandard::India).unwrap();
        assert_eq!(trend.label(), "▲ +12 (1h)");
        assert_eq!(trend.css_class(), "trend-up");
    }

    #[test]
    fn test_us_standard_reads_us_history_value() {
        let history = vec![entry(NOW - 3600, 100)]; // us_aqi = 50
        let trend = compute_trend(60, NOW, &history, AqiStandard::Us).unwrap();
        assert_eq!(trend.delta, 10);
    }
}
