//! One-hour trend badge

use leptos::prelude::*;
use vayu_types::Trend;

/// Renders the 1h trend indicator, or nothing when no history entry
/// qualified.
#[component]
pub fn TrendBadge(trend: Option<Trend>) -> impl IntoView {
    trend.map(|t| {
        view! {
            <span class=t.css_class()>{t.label()}</span>
        }
    })
}
