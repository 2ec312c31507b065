//! Page components

mod dashboard;
mod details;
mod explore;
mod map;

pub use dashboard::Dashboard;
pub use details::Details;
pub use explore::Explore;
pub use map::MapView;
