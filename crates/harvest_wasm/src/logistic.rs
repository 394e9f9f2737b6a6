use anyhow::Context;
use harvest_core::chart::{logistic_chart, ChartModel};
use harvest_core::logistic::{LogisticCurve, LogisticParams};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[derive(Debug, Serialize)]
pub(crate) struct LogisticView {
    curve: LogisticCurve,
    chart: ChartModel,
}

pub(crate) fn build_logistic_view(
    params: &LogisticParams,
    t_end: f64,
    samples: usize,
) -> anyhow::Result<LogisticView> {
    let curve = params
        .sample(t_end, samples)
        .context("Logistic curve sampling failed")?;
    let chart = logistic_chart(&curve);
    Ok(LogisticView { curve, chart })
}

/// Static logistic page: closed-form curve, carrying capacity and inflection point.
#[wasm_bindgen]
pub fn logistic_view(
    initial_population: f64,
    growth_rate: f64,
    carrying_capacity: f64,
    t_end: f64,
    samples: u32,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let params = LogisticParams::new(initial_population, growth_rate, carrying_capacity);
    let view = build_logistic_view(&params, t_end, samples as usize)
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
    to_value(&view).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
