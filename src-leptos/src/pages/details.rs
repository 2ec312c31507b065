//! Zone detail page: pollutant breakdown, trend, and history chart

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use vayu_types::viewmodel::{self, DetailModel};
use vayu_types::Provider;

use crate::api;
use crate::app::AppState;
use crate::components::{PollutantGrid, TrendBadge};
use crate::formatters::{format_cigarettes, format_minutes_ago};
use crate::interop::chart;

#[component]
pub fn Details() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let detail = RwSignal::new(Option::<DetailModel>::None);
    let standard = Memo::new(move |_| state.prefs.get().standard);

    // Refetch when the selected zone or the display standard changes. The
    // view requires a previously selected zone; without one there is
    // nothing to fetch.
    Effect::new(move |_| {
        let _ = standard.get();
        let Some(id) = state.selected_zone.get() else {
            detail.set(None);
            return;
        };
        if state.zones.with(|z| z.is_empty()) {
            return; // catalog not loaded yet; effect re-runs when it lands
        }
        let Some(zone) = state.zone_by_id(&id) else {
            return;
        };
        spawn_local(async move {
            let Ok(reading) = api::fetch_reading(&zone.id).await else {
                return;
            };
            let prefs = state.prefs.get_untracked();
            let now = chrono::Utc::now().timestamp();
            detail.set(Some(viewmodel::detail_view(&zone, &reading, &prefs, now)));
        });
    });

    // (Re)draw the history chart when data arrives, the canvas mounts, or
    // the theme changes.
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let theme = Memo::new(move |_| state.prefs.get().theme);
    Effect::new(move |_| {
        let theme = theme.get();
        let Some(model) = detail.get() else {
            return;
        };
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        chart::render_line_chart(&canvas, &model.chart, theme);
    });

    on_cleanup(chart::destroy_chart);

    view! {
        <div class="page details">
            <header class="page-header">
                <button
                    class="btn btn--ghost back-btn"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "← Back"
                </button>
            </header>

            {move || match detail.get() {
                Some(model) => view! {
                    <div class="detail-body">
                        <h1 class="detail-title">{model.name.clone()}</h1>

                        <div class="detail-hero">
                            <span class="detail-aqi" style=format!("color: {}", model.hex)>
                                {model.aqi}
                            </span>
                            <span
                                class="naqi-chip"
                                style=format!("background-color: {}", model.hex)
                            ></span>
                        </div>

                        <p class="detail-primary">{model.primary_label.clone()}</p>
                        <div class="detail-trend">
                            <TrendBadge trend=model.trend />
                        </div>
                        <p class="detail-updated">
                            {format_minutes_ago(model.updated_mins_ago)}
                        </p>
                        {model.cigarettes.map(|cigs| view! {
                            <p class="detail-cigarettes">{format_cigarettes(cigs)}</p>
                        })}

                        <PollutantGrid cells=model.pollutants.clone() />

                        <div class="chart-wrap">
                            <canvas node_ref=canvas_ref></canvas>
                        </div>

                        <ProviderAttribution provider=model.provider />
                    </div>
                }.into_any(),
                None => view! {
                    <div class="empty-state">
                        <p>"Select a zone from the dashboard to see details"</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Attribution block linking to the upstream data provider.
#[component]
fn ProviderAttribution(provider: Provider) -> impl IntoView {
    let logos = match provider {
        Provider::OpenAq => view! {
            <img src="assets/images/open_aq_logo.png" alt="OpenAQ" class="provider-logo" />
        }
        .into_any(),
        Provider::OpenMeteo => view! {
            <img
                src="assets/images/open_meteo_logo.png"
                alt="Open-Meteo"
                class="provider-logo dark-only"
            />
            <img
                src="assets/images/open_meteo_logo_light.png"
                alt="Open-Meteo"
                class="provider-logo light-only"
            />
        }
        .into_any(),
    };

    view! {
        <div class="detail-provider">
            <a href=provider.homepage() target="_blank" class="provider-link">
                {logos}
            </a>
        </div>
    }
}
