//! Explore list row with pin toggle

use leptos::prelude::*;
use vayu_types::viewmodel::ExploreRow;

/// One zone row in the explore list.
///
/// The pin button reflects live pin state via the shared preferences, so a
/// toggle updates the icon without re-rendering the list.
#[component]
pub fn ExploreRowItem(
    row: ExploreRow,
    pinned: Signal<bool>,
    on_toggle: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="explore-card">
            <div>
                <div class="explore-name">{row.name}</div>
                <div class="explore-provider">{row.provider_label}</div>
            </div>
            <button
                class=move || format!("pin-btn {}", if pinned.get() { "pinned" } else { "" })
                title=move || if pinned.get() { "Unpin zone" } else { "Pin zone" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_toggle();
                }
            >
                {move || if pinned.get() { "📌" } else { "📍" }}
            </button>
        </div>
    }
}
