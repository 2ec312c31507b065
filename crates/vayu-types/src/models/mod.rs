//! Domain models for zones, readings, and user preferences.

mod preferences;
mod reading;
mod zone;

pub use preferences::{AqiStandard, Preferences, Theme};
pub use reading::{AqiReading, HistoryEntry, Pollutants, POLLUTANT_TABLE};
pub use zone::{Provider, Zone};
