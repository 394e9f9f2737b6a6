use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Parameter {name} must be finite, got {value}.")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Carrying capacity must be positive, got {0}.")]
    NonPositiveCapacity(f64),

    #[error("Harvest rate must be non-negative, got {0}.")]
    NegativeHarvest(f64),

    #[error("Time horizon must be positive, got {0}.")]
    NonPositiveHorizon(f64),

    #[error("Step size must be positive and finite, got {0}.")]
    InvalidStepSize(f64),

    #[error("Step size {step_size} over horizon {horizon} needs {samples} samples (limit {limit}).")]
    TooManySamples {
        step_size: f64,
        horizon: f64,
        samples: usize,
        limit: usize,
    },

    #[error("Integration diverged at t = {t}.")]
    Diverged { t: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogisticError {
    #[error("Parameter {name} must be finite, got {value}.")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Growth rate must be positive, got {0}.")]
    NonPositiveRate(f64),

    #[error("Carrying capacity must be positive, got {0}.")]
    NonPositiveCapacity(f64),

    #[error("Initial population must be non-negative, got {0}.")]
    NegativePopulation(f64),

    #[error("Sampling window must end after t = 0, got {0}.")]
    NonPositiveWindow(f64),

    #[error("At least 2 samples are required, got {0}.")]
    TooFewSamples(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Slider {name} is malformed: {reason}")]
    MalformedSlider { name: &'static str, reason: String },

    #[error("Settings are malformed: {0}")]
    MalformedSettings(String),

    #[error("{name} = {value} is outside [{min}, {max}].")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
