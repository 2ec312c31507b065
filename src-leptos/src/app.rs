//! Main App component with routing and global state

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use vayu_types::{Preferences, Zone};

use crate::components::Sidebar;
use crate::pages::{Dashboard, Details, Explore, MapView};
use crate::storage;

/// Global application state.
///
/// Replaces ambient module globals with one explicit context object: the
/// zone catalog, the persisted preferences, and the id of the zone the
/// detail view is showing.
#[derive(Clone, Copy)]
pub struct AppState {
    pub zones: RwSignal<Vec<Zone>>,
    pub prefs: RwSignal<Preferences>,
    pub selected_zone: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            zones: RwSignal::new(vec![]),
            prefs: RwSignal::new(storage::load_preferences()),
            selected_zone: RwSignal::new(None),
        }
    }

    /// Look up a catalog entry by id.
    pub fn zone_by_id(&self, id: &str) -> Option<Zone> {
        self.zones.with_untracked(|zones| zones.iter().find(|z| z.id == id).cloned())
    }

    /// Mutate preferences and persist the result.
    pub fn update_prefs(&self, f: impl FnOnce(&mut Preferences)) {
        self.prefs.update(f);
        self.prefs.with_untracked(storage::save_preferences);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    // Create global state
    let state = AppState::new();
    provide_context(state);

    // Keep <html data-theme> in sync with the preference
    let prefs = state.prefs;
    Effect::new(move |_| {
        storage::apply_theme(prefs.get().theme);
    });

    // Fetch the zone catalog once per session
    let zones = state.zones;
    Effect::new(move |_| {
        spawn_local(async move {
            match crate::api::fetch_zones().await {
                Ok(catalog) => {
                    log::info!("Loaded {} zones", catalog.len());
                    zones.set(catalog);
                }
                Err(e) => log::warn!("Failed to load zone catalog: {}", e),
            }
        });
    });

    view! {
        <Router>
            <div class="app-container">
                <Sidebar />
                <main class="main-content">
                    <Routes fallback=|| "Page not found">
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/explore") view=Explore />
                        <Route path=path!("/map") view=MapView />
                        <Route path=path!("/zone") view=Details />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
