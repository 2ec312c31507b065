//! Dashboard card components (real and skeleton)

use leptos::prelude::*;
use vayu_types::viewmodel::CardModel;

/// A pinned zone's dashboard card.
#[component]
pub fn ZoneCard(card: CardModel, on_click: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="dashboard-card" on:click=move |_| on_click()>
            <div>
                <h3 class="card-title">{card.name}</h3>
                <p class="card-pollutant">{card.pollutant_label}</p>
            </div>
            <div class=format!("aqi-badge-small {}", card.badge_class)>
                {card.aqi}
            </div>
        </div>
    }
}

/// Placeholder card shown while readings are in flight.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="dashboard-card skeleton-card">
            <div class="skeleton-body">
                <div class="skeleton-line skeleton-line--title"></div>
                <div class="skeleton-line skeleton-line--sub"></div>
            </div>
            <div class="skeleton-badge"></div>
        </div>
    }
}
