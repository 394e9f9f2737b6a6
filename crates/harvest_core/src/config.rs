//! Slider ranges and integration settings for the interactive harvest view.

use crate::error::ConfigError;
use crate::model::HarvestParams;
use serde::{Deserialize, Serialize};

/// Step-size policy: the horizon is split into `step_divisions` steps, but never finer
/// than `min_step_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub step_divisions: usize,
    pub min_step_size: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            step_divisions: 400,
            min_step_size: 0.05,
        }
    }
}

impl SimulationSettings {
    pub fn step_size_for(&self, horizon: f64) -> f64 {
        self.min_step_size.max(horizon / self.step_divisions as f64)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_divisions == 0 {
            return Err(ConfigError::MalformedSettings(
                "step_divisions must be greater than zero".to_string(),
            ));
        }
        if !self.min_step_size.is_finite() || self.min_step_size <= 0.0 {
            return Err(ConfigError::MalformedSettings(format!(
                "min_step_size must be positive, got {}",
                self.min_step_size
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderSpec {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let malformed = |reason: String| ConfigError::MalformedSlider { name, reason };
        if ![self.min, self.max, self.step, self.default]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(malformed("all bounds must be finite".to_string()));
        }
        if self.min >= self.max {
            return Err(malformed(format!("min {} must be below max {}", self.min, self.max)));
        }
        if self.step <= 0.0 {
            return Err(malformed(format!("step must be positive, got {}", self.step)));
        }
        if !self.contains(self.default) {
            return Err(malformed(format!(
                "default {} lies outside [{}, {}]",
                self.default, self.min, self.max
            )));
        }
        Ok(())
    }

    fn check(&self, name: &'static str, value: f64) -> Result<(), ConfigError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Ranges of the five harvest sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderRanges {
    pub growth_rate: SliderSpec,
    pub carrying_capacity: SliderSpec,
    pub harvest_rate: SliderSpec,
    pub initial_population: SliderSpec,
    pub horizon: SliderSpec,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            growth_rate: SliderSpec::new(0.005, 0.2, 0.005, 0.06),
            carrying_capacity: SliderSpec::new(50.0, 500.0, 10.0, 150.0),
            harvest_rate: SliderSpec::new(0.0, 50.0, 0.5, 5.0),
            initial_population: SliderSpec::new(0.0, 300.0, 1.0, 80.0),
            horizon: SliderSpec::new(1.0, 40.0, 1.0, 20.0),
        }
    }
}

impl SliderRanges {
    fn named(&self) -> [(&'static str, &SliderSpec); 5] {
        [
            ("growth_rate", &self.growth_rate),
            ("carrying_capacity", &self.carrying_capacity),
            ("harvest_rate", &self.harvest_rate),
            ("initial_population", &self.initial_population),
            ("horizon", &self.horizon),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, spec) in self.named() {
            spec.validate(name)?;
        }
        Ok(())
    }

    /// Parameters with every slider at its default position.
    pub fn defaults(&self) -> HarvestParams {
        HarvestParams::new(
            self.initial_population.default,
            self.growth_rate.default,
            self.carrying_capacity.default,
            self.harvest_rate.default,
            self.horizon.default,
        )
    }

    pub fn check(&self, params: &HarvestParams) -> Result<(), ConfigError> {
        self.growth_rate.check("growth_rate", params.growth_rate)?;
        self.carrying_capacity
            .check("carrying_capacity", params.carrying_capacity)?;
        self.harvest_rate.check("harvest_rate", params.harvest_rate)?;
        self.initial_population
            .check("initial_population", params.initial_population)?;
        self.horizon.check("horizon", params.horizon)
    }
}

/// Full configuration of the harvest view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    pub sliders: SliderRanges,
    pub simulation: SimulationSettings,
}

impl HarvestConfig {
    /// Parses a JSON document; missing fields fall back to the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: HarvestConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sliders.validate()?;
        self.simulation.validate()
    }
}
