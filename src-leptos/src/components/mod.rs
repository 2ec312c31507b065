//! Reusable UI components

mod explore_row;
mod pollutant_grid;
mod sidebar;
mod trend_badge;
mod zone_card;

pub use explore_row::ExploreRowItem;
pub use pollutant_grid::PollutantGrid;
pub use sidebar::Sidebar;
pub use trend_badge::TrendBadge;
pub use zone_card::{SkeletonCard, ZoneCard};
