//! Cigarette-equivalent exposure estimate.

/// PM2.5 concentration (µg/m³) roughly equivalent to smoking one cigarette
/// per day (Berkeley Earth rule of thumb).
pub const CIGARETTE_PM25_RATIO: f64 = 22.0;

/// Convert a PM2.5 concentration to a cigarettes-per-day equivalent,
/// rounded to one decimal place.
///
/// Returns `None` when the estimate rounds below 0.1 — negligible exposure
/// is suppressed rather than shown as "0.0 cigarettes".
pub fn cigarette_equivalent(pm25: f64) -> Option<f64> {
    let cigs = (pm25 / CIGARETTE_PM25_RATIO * 10.0).round() / 10.0;
    if cigs < 0.1 {
        None
    } else {
        Some(cigs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_cigarette_at_ratio() {
        assert_eq!(cigarette_equivalent(22.0), Some(1.0));
    }

    #[test]
    fn test_zero_is_suppressed() {
        assert_eq!(cigarette_equivalent(0.0), None);
        assert_eq!(cigarette_equivalent(1.0), None);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        assert_eq!(cigarette_equivalent(66.0), Some(3.0));
        assert_eq!(cigarette_equivalent(25.0), Some(1.1));
        assert_eq!(cigarette_equivalent(2.2), Some(0.1));
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for pm in [3.0, 10.0, 22.0, 50.0, 110.0, 300.0] {
            let cigs = cigarette_equivalent(pm).unwrap_or(0.0);
            assert!(cigs >= last, "not monotonic at pm25={}", pm);
            last = cigs;
        }
    }
}
