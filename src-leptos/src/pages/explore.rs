//! Explore page: searchable zone catalog with pin toggles

use leptos::prelude::*;
use vayu_types::viewmodel;

use crate::app::AppState;
use crate::components::ExploreRowItem;

#[component]
pub fn Explore() -> impl IntoView {
    let state = expect_context::<AppState>();
    let query = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        let query = query.get();
        let prefs = state.prefs.get();
        state.zones.with(|zones| {
            viewmodel::filter_zones(zones, &query)
                .into_iter()
                .map(|zone| viewmodel::explore_row(zone, &prefs))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page explore">
            <header class="page-header">
                <h1>"Explore"</h1>
                <p class="subtitle">"Find and pin zones to your dashboard"</p>
            </header>

            <input
                type="search"
                class="zone-search"
                placeholder="Search zones..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <div class="zone-list">
                <For
                    each=move || rows.get()
                    key=|row| row.zone_id.clone()
                    children=move |row| {
                        let toggle_id = row.zone_id.clone();
                        let watch_id = row.zone_id.clone();
                        let pinned =
                            Signal::derive(move || state.prefs.get().is_pinned(&watch_id));
                        view! {
                            <ExploreRowItem
                                row=row
                                pinned=pinned
                                on_toggle=move || state.update_prefs(|p| {
                                    p.toggle_pin(&toggle_id);
                                })
                            />
                        }
                    }
                />
                <Show when=move || rows.get().is_empty()>
                    <p class="empty-text">"No zones match"</p>
                </Show>
            </div>
        </div>
    }
}
