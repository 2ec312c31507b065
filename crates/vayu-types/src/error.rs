//! Typed parse errors for persisted preference values.
//!
//! Preference values round-trip through localStorage as plain strings, so the
//! parse direction can fail on unknown or corrupted input. Callers are
//! expected to fall back to the documented defaults rather than surface these
//! errors to the user.

use thiserror::Error;

/// Error returned when a persisted string does not name a known value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Stored theme string is neither "light" nor "dark"
    #[error("unknown theme: {0}")]
    Theme(String),

    /// Stored standard string is neither "india" nor "us"
    #[error("unknown AQI standard: {0}")]
    Standard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::Theme("sepia".to_string());
        assert_eq!(format!("{}", err), "unknown theme: sepia");

        let err = ParseError::Standard("eu".to_string());
        assert!(format!("{}", err).contains("eu"));
    }
}
