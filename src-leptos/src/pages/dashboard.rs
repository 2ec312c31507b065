//! Dashboard page: pinned zone cards with skeleton loading

use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use vayu_types::viewmodel::{self, CardModel};

use crate::api;
use crate::app::AppState;
use crate::components::{SkeletonCard, ZoneCard};

/// Number of placeholder cards shown while readings are in flight.
pub const SKELETON_CARD_COUNT: usize = 4;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let cards = RwSignal::new(Vec::<CardModel>::new());
    let loading = RwSignal::new(false);

    // Theme changes restyle through CSS variables; only pin/standard changes
    // (and the catalog arriving) should refetch readings.
    let pinned = Memo::new(move |_| state.prefs.get().pinned.clone());
    let standard = Memo::new(move |_| state.prefs.get().standard);

    Effect::new(move |_| {
        let ids = pinned.get();
        let _ = standard.get();
        let zones = state.zones.get();

        if ids.is_empty() {
            // Empty state, and no fetches at all.
            cards.set(vec![]);
            loading.set(false);
            return;
        }
        if zones.is_empty() {
            return; // catalog not loaded yet; effect re-runs when it lands
        }

        loading.set(true);
        spawn_local(async move {
            // Pinned ids missing from the catalog, and zones whose reading
            // fetch fails, are silently dropped from the result set.
            let fetches = viewmodel::pinned_zones(&zones, &ids).into_iter().map(|zone| {
                async move {
                    let reading = api::fetch_reading(&zone.id).await.ok()?;
                    Some((zone, reading))
                }
            });
            let results = join_all(fetches).await;

            // Single swap once everything settled: skeletons out, cards in.
            let prefs = state.prefs.get_untracked();
            cards.set(
                results
                    .into_iter()
                    .flatten()
                    .map(|(zone, reading)| viewmodel::dashboard_card(&zone, &reading, &prefs))
                    .collect(),
            );
            loading.set(false);
        });
    });

    let open_details = move |zone_id: String| {
        state.selected_zone.set(Some(zone_id));
        navigate("/zone", Default::default());
    };

    view! {
        <div class="page dashboard">
            <header class="page-header">
                <h1>"Dashboard"</h1>
                <p class="subtitle">"Air quality in your pinned zones"</p>
            </header>

            <Show when=move || loading.get()>
                <div class="card-grid">
                    {(0..SKELETON_CARD_COUNT).map(|_| view! { <SkeletonCard /> }).collect_view()}
                </div>
            </Show>

            <Show when=move || !loading.get() && pinned.get().is_empty()>
                <div class="empty-state">
                    <span class="empty-icon">"📌"</span>
                    <p>"Nothing pinned yet"</p>
                    <a href="/explore" class="btn btn--primary">"Explore zones"</a>
                </div>
            </Show>

            <Show when=move || !loading.get()>
                <div class="card-grid">
                    <For
                        each=move || cards.get()
                        key=|card| card.zone_id.clone()
                        children={
                            let open_details = open_details.clone();
                            move |card: CardModel| {
                                let id = card.zone_id.clone();
                                let open = open_details.clone();
                                view! { <ZoneCard card=card on_click=move || open(id.clone()) /> }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
