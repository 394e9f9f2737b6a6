//! Closed-form logistic growth without harvesting.

use crate::error::LogisticError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub initial_population: f64,
    pub growth_rate: f64,
    pub carrying_capacity: f64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self {
            initial_population: 50.0,
            growth_rate: 0.03,
            carrying_capacity: 150.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflectionPoint {
    pub time: f64,
    pub population: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticCurve {
    pub params: LogisticParams,
    pub times: Vec<f64>,
    pub populations: Vec<f64>,
    /// Present only when the inflection falls inside the sampled window.
    pub inflection: Option<InflectionPoint>,
}

impl LogisticParams {
    pub fn new(initial_population: f64, growth_rate: f64, carrying_capacity: f64) -> Self {
        Self {
            initial_population,
            growth_rate,
            carrying_capacity,
        }
    }

    pub fn validate(&self) -> Result<(), LogisticError> {
        for (name, value) in [
            ("initial_population", self.initial_population),
            ("growth_rate", self.growth_rate),
            ("carrying_capacity", self.carrying_capacity),
        ] {
            if !value.is_finite() {
                return Err(LogisticError::NonFinite { name, value });
            }
        }
        if self.growth_rate <= 0.0 {
            return Err(LogisticError::NonPositiveRate(self.growth_rate));
        }
        if self.carrying_capacity <= 0.0 {
            return Err(LogisticError::NonPositiveCapacity(self.carrying_capacity));
        }
        if self.initial_population < 0.0 {
            return Err(LogisticError::NegativePopulation(self.initial_population));
        }
        Ok(())
    }

    /// P(t) = K / (1 + ((K - P0)/P0) e^{-rt}); identically zero when P0 = 0.
    pub fn population_at(&self, t: f64) -> f64 {
        let p0 = self.initial_population;
        if p0 == 0.0 {
            return 0.0;
        }
        let k = self.carrying_capacity;
        k / (1.0 + ((k - p0) / p0) * (-self.growth_rate * t).exp())
    }

    /// Time at which P = K/2, i.e. where growth is fastest.
    ///
    /// Only exists for 0 < P0 < K; a population starting at or above K/2 has its
    /// inflection at t <= 0.
    pub fn inflection(&self) -> Option<InflectionPoint> {
        let p0 = self.initial_population;
        let k = self.carrying_capacity;
        if p0 <= 0.0 || p0 >= k || self.growth_rate <= 0.0 {
            return None;
        }
        Some(InflectionPoint {
            time: ((k - p0) / p0).ln() / self.growth_rate,
            population: 0.5 * k,
        })
    }

    /// Samples the solution on `samples` evenly spaced times in [0, t_end].
    pub fn sample(&self, t_end: f64, samples: usize) -> Result<LogisticCurve, LogisticError> {
        self.validate()?;
        if !t_end.is_finite() || t_end <= 0.0 {
            return Err(LogisticError::NonPositiveWindow(t_end));
        }
        if samples < 2 {
            return Err(LogisticError::TooFewSamples(samples));
        }

        let spacing = t_end / (samples - 1) as f64;
        let times: Vec<f64> = (0..samples)
            .map(|i| if i == samples - 1 { t_end } else { i as f64 * spacing })
            .collect();
        let populations = times.iter().map(|&t| self.population_at(t)).collect();
        let inflection = self
            .inflection()
            .filter(|point| point.time >= 0.0 && point.time <= t_end);

        Ok(LogisticCurve {
            params: *self,
            times,
            populations,
            inflection,
        })
    }
}
