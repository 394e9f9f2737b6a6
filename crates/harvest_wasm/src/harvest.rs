//! Harvested-logistic view: slider values in, report + chart + summary out.

use anyhow::{Context, Result};
use harvest_core::chart::{harvest_chart, ChartModel};
use harvest_core::config::HarvestConfig;
use harvest_core::simulation::{analyze, HarvestReport};
use harvest_core::HarvestParams;
use js_sys::Float64Array;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Payload returned to the page on every slider change.
#[derive(Debug, Serialize)]
pub(crate) struct HarvestView {
    report: HarvestReport,
    chart: ChartModel,
    summary: String,
}

pub(crate) fn build_view(config: &HarvestConfig, params: &HarvestParams) -> Result<HarvestView> {
    let report = analyze(params, &config.simulation).with_context(|| {
        format!(
            "Harvest simulation failed for P0 = {}, r = {}, K = {}, H = {}, t_max = {}",
            params.initial_population,
            params.growth_rate,
            params.carrying_capacity,
            params.harvest_rate,
            params.horizon
        )
    })?;
    let chart = harvest_chart(&report);
    let summary = report.summary();
    Ok(HarvestView {
        report,
        chart,
        summary,
    })
}

fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

#[wasm_bindgen]
pub struct WasmHarvestModel {
    config: HarvestConfig,
}

#[wasm_bindgen]
impl WasmHarvestModel {
    /// Builds the model from an optional JSON configuration; `None` uses the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmHarvestModel, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(text) => HarvestConfig::from_json(&text)
                .context("Invalid harvest configuration")
                .map_err(to_js_error)?,
            None => HarvestConfig::default(),
        };
        Ok(WasmHarvestModel { config })
    }

    pub fn ranges(&self) -> Result<JsValue, JsValue> {
        to_value(&self.config.sliders)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn defaults(&self) -> Result<JsValue, JsValue> {
        to_value(&self.config.sliders.defaults())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn step_size(&self, horizon: f64) -> f64 {
        self.config.simulation.step_size_for(horizon)
    }

    /// Reruns the simulation for the current slider positions.
    pub fn update(
        &self,
        initial_population: f64,
        growth_rate: f64,
        carrying_capacity: f64,
        harvest_rate: f64,
        horizon: f64,
    ) -> Result<JsValue, JsValue> {
        let params = HarvestParams::new(
            initial_population,
            growth_rate,
            carrying_capacity,
            harvest_rate,
            horizon,
        );
        let view = build_view(&self.config, &params).map_err(to_js_error)?;
        to_value(&view).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Like `update`, but first rejects values outside the configured slider ranges.
    pub fn update_checked(
        &self,
        initial_population: f64,
        growth_rate: f64,
        carrying_capacity: f64,
        harvest_rate: f64,
        horizon: f64,
    ) -> Result<JsValue, JsValue> {
        let params = HarvestParams::new(
            initial_population,
            growth_rate,
            carrying_capacity,
            harvest_rate,
            horizon,
        );
        self.config
            .sliders
            .check(&params)
            .context("Slider value out of range")
            .map_err(to_js_error)?;
        let view = build_view(&self.config, &params).map_err(to_js_error)?;
        to_value(&view).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Population samples only, for callers that draw the curve themselves.
    pub fn population_series(
        &self,
        initial_population: f64,
        growth_rate: f64,
        carrying_capacity: f64,
        harvest_rate: f64,
        horizon: f64,
    ) -> Result<Float64Array, JsValue> {
        let params = HarvestParams::new(
            initial_population,
            growth_rate,
            carrying_capacity,
            harvest_rate,
            horizon,
        );
        let view = build_view(&self.config, &params).map_err(to_js_error)?;
        let populations = view
            .report
            .trajectory
            .map(|trajectory| trajectory.populations)
            .unwrap_or_default();
        Ok(Float64Array::from(populations.as_slice()))
    }
}
