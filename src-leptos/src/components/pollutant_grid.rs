//! Pollutant concentration grid

use leptos::prelude::*;
use vayu_types::viewmodel::PollutantCell;

/// Sparse grid of pollutant concentrations; absent pollutants produce no
/// cell at all.
#[component]
pub fn PollutantGrid(cells: Vec<PollutantCell>) -> impl IntoView {
    view! {
        <div class="pollutant-grid">
            {cells.into_iter().map(|cell| view! {
                <div class="pollutant-card">
                    <span class="p-name">{cell.label}</span>
                    <span class="p-value">
                        {cell.value}
                        <span class="p-unit">{cell.unit}</span>
                    </span>
                </div>
            }).collect_view()}
        </div>
    }
}
