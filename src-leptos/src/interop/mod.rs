//! Bindings to the CDN-loaded map and chart globals.

pub mod chart;
pub mod leaflet;
