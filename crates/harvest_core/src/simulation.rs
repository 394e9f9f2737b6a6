use crate::config::SimulationSettings;
use crate::equilibrium::{classify, is_extinct, Classification};
use crate::error::SimulationError;
use crate::model::HarvestParams;
use crate::solvers::Rk4;
use crate::traits::{Steppable, VectorField};
use serde::{Deserialize, Serialize};

/// Populations at or below this are treated as extinct.
pub const EXTINCTION_THRESHOLD: f64 = 1e-6;

/// Upper bound on samples per run, guarding against tiny step sizes.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Sampled population curve. `times` and `populations` always have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub populations: Vec<f64>,
    /// Integration stopped before the horizon because the population hit zero.
    pub truncated: bool,
}

impl Trajectory {
    pub fn from_parts(times: Vec<f64>, populations: Vec<f64>, truncated: bool) -> Self {
        debug_assert_eq!(times.len(), populations.len());
        Self {
            times,
            populations,
            truncated,
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.populations.iter().copied())
    }

    pub fn final_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    pub fn final_population(&self) -> Option<f64> {
        self.populations.last().copied()
    }

    pub fn peak_population(&self) -> Option<f64> {
        self.populations.iter().copied().reduce(f64::max)
    }
}

/// Integrates dP/dt = rP(1 - P/K) - H from t = 0 to the horizon with fixed-step RK4.
///
/// The population is floored at zero between steps. The first step that lands at or
/// below [`EXTINCTION_THRESHOLD`] is snapped to 0 and ends the trajectory.
pub fn simulate(params: &HarvestParams, step_size: f64) -> Result<Trajectory, SimulationError> {
    params.validate()?;
    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(SimulationError::InvalidStepSize(step_size));
    }

    let steps = (params.horizon / step_size).floor();
    if steps >= MAX_SAMPLES as f64 {
        return Err(SimulationError::TooManySamples {
            step_size,
            horizon: params.horizon,
            samples: (steps as usize).saturating_add(1),
            limit: MAX_SAMPLES,
        });
    }
    let steps = steps as usize;

    let field = params.vector_field();
    let mut solver = Rk4::new(VectorField::<f64>::dimension(&field));
    let mut times = Vec::with_capacity(steps + 1);
    let mut populations = Vec::with_capacity(steps + 1);
    let mut state = [params.initial_population.max(0.0)];
    times.push(0.0);
    populations.push(state[0]);

    let mut truncated = false;
    for i in 1..=steps {
        state[0] = state[0].max(0.0);
        let mut t = (i - 1) as f64 * step_size;
        solver.step(&field, &mut t, &mut state, step_size);
        // Sample times come from the step index so they do not drift over long runs.
        let t = i as f64 * step_size;

        // An overflow towards -inf is a crash to zero like any other; only NaN or
        // +inf leave nothing meaningful to record.
        if state[0].is_nan() || state[0] == f64::INFINITY {
            return Err(SimulationError::Diverged { t });
        }
        state[0] = state[0].max(0.0);

        if state[0] <= EXTINCTION_THRESHOLD {
            times.push(t);
            populations.push(0.0);
            truncated = true;
            log::debug!("population reached zero at t = {t:.4}; stopping early");
            break;
        }
        times.push(t);
        populations.push(state[0]);
    }

    Ok(Trajectory {
        times,
        populations,
        truncated,
    })
}

/// Everything the harvest view needs for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestReport {
    pub params: HarvestParams,
    pub step_size: f64,
    pub classification: Classification,
    /// Absent when the classification is invalid.
    pub trajectory: Option<Trajectory>,
    pub extinct: bool,
}

impl HarvestReport {
    /// Text shown next to the chart.
    pub fn summary(&self) -> String {
        match &self.classification {
            Classification::Valid(analysis) => format!(
                "H* = rK/4 = {:.4}. Régimen: {}",
                analysis.max_sustainable_yield,
                analysis.regime.description()
            ),
            Classification::Invalid => {
                "Parámetros inválidos: r y K deben ser positivos.".to_string()
            }
        }
    }
}

/// Classifies the parameters and, when they are valid, simulates them.
pub fn analyze(
    params: &HarvestParams,
    settings: &SimulationSettings,
) -> Result<HarvestReport, SimulationError> {
    let classification = classify(
        params.growth_rate,
        params.carrying_capacity,
        params.harvest_rate,
    );
    let step_size = settings.step_size_for(params.horizon);

    if !classification.is_valid() {
        return Ok(HarvestReport {
            params: *params,
            step_size,
            classification,
            trajectory: None,
            extinct: false,
        });
    }

    let trajectory = simulate(params, step_size)?;
    let extinct = is_extinct(&classification, params.harvest_rate, &trajectory);

    Ok(HarvestReport {
        params: *params,
        step_size,
        classification,
        trajectory: Some(trajectory),
        extinct,
    })
}
