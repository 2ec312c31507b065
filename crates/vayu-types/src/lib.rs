//! # Vayu Types
//!
//! Domain models and pure display logic for the Vayu air-quality dashboard.
//!
//! This crate is the foundation of the workspace:
//!
//! - **`error`** - Typed parse errors for persisted preference values
//! - **`models`** - Domain models (Zone, AqiReading, Preferences)
//! - **`aqi`** - AQI classification, trend computation, exposure estimate
//! - **`viewmodel`** - Renderable descriptions derived from (entity, prefs)
//!
//! ## Architecture Role
//!
//! `vayu-types` sits below the frontend crate and is browser-free:
//!
//! ```text
//!     vayu-types (this crate)
//!          │
//!          ▼
//!     vayu-leptos (WASM frontend)
//! ```
//!
//! Everything here is:
//! - **Pure** - no DOM access, no network, no storage
//! - **Serializable** via serde for the API and localStorage boundaries
//! - **Clone + PartialEq** for reactive state and testing

pub mod aqi;
pub mod error;
pub mod models;
pub mod viewmodel;

// Re-export error types for convenience
pub use error::ParseError;

// Re-export core model types
pub use models::{
    AqiReading, AqiStandard, HistoryEntry, Preferences, Provider, Theme, Zone,
};

// Re-export the pure display computations
pub use aqi::{
    band_color, cigarette_equivalent, classify, compute_trend, display_aqi, Band, BandColor,
    Trend, TrendDirection,
};
