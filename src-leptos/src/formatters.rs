//! Utility functions for formatting and display

/// Format the freshness line for a reading, e.g. `"Updated 12 min ago"`.
///
/// Clock skew can put a reading slightly in the future; clamp to 0 rather
/// than showing a negative age.
pub fn format_minutes_ago(mins: i64) -> String {
    format!("Updated {} min ago", mins.max(0))
}

/// Format a cigarette-equivalent estimate, e.g. `"≈ 3.0 cigarettes/day"`.
pub fn format_cigarettes(cigs: f64) -> String {
    format!("≈ {:.1} cigarettes/day", cigs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes_ago() {
        assert_eq!(format_minutes_ago(10), "Updated 10 min ago");
        assert_eq!(format_minutes_ago(0), "Updated 0 min ago");
    }

    #[test]
    fn test_format_minutes_ago_clamps_future() {
        assert_eq!(format_minutes_ago(-3), "Updated 0 min ago");
    }

    #[test]
    fn test_format_cigarettes() {
        assert_eq!(format_cigarettes(3.0), "≈ 3.0 cigarettes/day");
        assert_eq!(format_cigarettes(0.1), "≈ 0.1 cigarettes/day");
    }
}
