//! Minimal bindings to the global Chart.js constructor.
//!
//! One line chart exists at a time (the detail view's history chart); its
//! instance is held in a thread local so a re-render can destroy the
//! previous chart before mounting the next.

use std::cell::RefCell;

use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use vayu_types::viewmodel::ChartSeries;
use vayu_types::Theme;

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(constructor)]
    fn new(ctx: &JsValue, config: &JsValue) -> Chart;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

thread_local! {
    static DETAIL_CHART: RefCell<Option<Chart>> = const { RefCell::new(None) };
}

const LINE_COLOR: &str = "#a8c7fa";

fn fill_stops(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Dark => ("rgba(168, 199, 250, 0.4)", "rgba(168, 199, 250, 0.0)"),
        Theme::Light => ("rgba(65, 105, 225, 0.4)", "rgba(65, 105, 225, 0.0)"),
    }
}

/// Render the historical line chart onto the canvas, replacing any
/// previously mounted chart. No-ops if the 2d context is unavailable.
pub fn render_line_chart(canvas: &HtmlCanvasElement, series: &ChartSeries, theme: Theme) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    destroy_chart();

    let config = json!({
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "data": series.values,
                "borderColor": LINE_COLOR,
                "borderWidth": 2,
                "tension": 0.4,
                "pointRadius": 0,
                "pointHoverRadius": 6,
                "fill": true,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "interaction": { "mode": "index", "intersect": false },
            "plugins": { "legend": { "display": false }, "tooltip": { "enabled": true } },
            "scales": { "x": { "display": false }, "y": { "display": false, "min": 0 } },
            "layout": { "padding": 0 },
        },
    });
    // Plain-object serialization; the default serializer would emit ES Maps,
    // which Chart.js option handling does not accept.
    let config = match config.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Chart config conversion failed: {}", e);
            return;
        }
    };

    // The fill gradient needs the live 2d context, so it is grafted onto the
    // dataset after JSON conversion.
    let (top, bottom) = fill_stops(theme);
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, 300.0);
    let _ = gradient.add_color_stop(0.0, top);
    let _ = gradient.add_color_stop(1.0, bottom);
    if let Some(dataset) = first_dataset(&config) {
        let _ = js_sys::Reflect::set(
            &dataset,
            &JsValue::from_str("backgroundColor"),
            gradient.as_ref(),
        );
    }

    let chart = Chart::new(ctx.as_ref(), &config);
    DETAIL_CHART.with(|cell| *cell.borrow_mut() = Some(chart));
}

/// Tear down the mounted chart, if any.
pub fn destroy_chart() {
    DETAIL_CHART.with(|cell| {
        if let Some(chart) = cell.borrow_mut().take() {
            chart.destroy();
        }
    });
}

fn first_dataset(config: &JsValue) -> Option<JsValue> {
    let data = js_sys::Reflect::get(config, &JsValue::from_str("data")).ok()?;
    let datasets = js_sys::Reflect::get(&data, &JsValue::from_str("datasets")).ok()?;
    let array: js_sys::Array = datasets.dyn_into().ok()?;
    Some(array.get(0))
}
