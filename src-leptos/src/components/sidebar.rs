//! Sidebar navigation component with preference toggles

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use vayu_types::{AqiStandard, Theme};

use crate::app::AppState;

const VERSION: &str = env!("GIT_VERSION");

/// Helper to get checked state from checkbox event
fn event_target_checked(ev: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();

    let nav_items = vec![
        ("Dashboard", "/", "📊"),
        ("Explore", "/explore", "🔍"),
        ("Map", "/map", "🗺️"),
    ];

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="logo">
                    <span class="logo-icon">"🌬️"</span>
                    <span class="logo-text">"Vayu"</span>
                </div>
                <span class="version">{format!("v{}", VERSION)}</span>
            </div>

            <nav class="sidebar-nav">
                {nav_items.into_iter().map(|(label, path, icon)| {
                    let current_path = location.pathname;
                    let is_active = move || {
                        let curr = current_path.get();
                        if path == "/" {
                            // Detail view highlights the dashboard entry
                            curr == "/" || curr == "/zone"
                        } else {
                            curr.starts_with(path)
                        }
                    };

                    view! {
                        <a
                            href=path
                            class=move || format!("nav-item {}", if is_active() { "active" } else { "" })
                        >
                            <span class="nav-icon">{icon}</span>
                            <span class="nav-label">{label}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <label class="pref-toggle">
                    <span>"Dark mode"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || state.prefs.get().theme == Theme::Dark
                        on:change=move |ev| {
                            let theme = if event_target_checked(&ev) { Theme::Dark } else { Theme::Light };
                            state.update_prefs(|p| p.theme = theme);
                        }
                    />
                </label>
                <label class="pref-toggle">
                    <span>"US AQI"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || state.prefs.get().standard == AqiStandard::Us
                        on:change=move |ev| {
                            let standard = if event_target_checked(&ev) {
                                AqiStandard::Us
                            } else {
                                AqiStandard::India
                            };
                            state.update_prefs(|p| p.standard = standard);
                        }
                    />
                </label>
            </div>
        </aside>
    }
}
