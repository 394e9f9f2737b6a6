//! Parameters and vector field of the logistic model with constant harvesting.

use crate::error::SimulationError;
use crate::traits::{Scalar, VectorField};
use serde::{Deserialize, Serialize};

/// Inputs of one harvested-logistic run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarvestParams {
    /// Initial population P0.
    pub initial_population: f64,
    /// Intrinsic growth rate r.
    pub growth_rate: f64,
    /// Carrying capacity K.
    pub carrying_capacity: f64,
    /// Constant harvest rate H.
    pub harvest_rate: f64,
    /// Time horizon t_max.
    pub horizon: f64,
}

impl HarvestParams {
    pub fn new(
        initial_population: f64,
        growth_rate: f64,
        carrying_capacity: f64,
        harvest_rate: f64,
        horizon: f64,
    ) -> Self {
        Self {
            initial_population,
            growth_rate,
            carrying_capacity,
            harvest_rate,
            horizon,
        }
    }

    /// Checks the constraints the integrator relies on.
    ///
    /// A negative initial population is accepted here; the simulator clamps it to zero.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("initial_population", self.initial_population),
            ("growth_rate", self.growth_rate),
            ("carrying_capacity", self.carrying_capacity),
            ("harvest_rate", self.harvest_rate),
            ("horizon", self.horizon),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimulationError::NonFinite { name, value });
            }
        }
        if self.carrying_capacity <= 0.0 {
            return Err(SimulationError::NonPositiveCapacity(self.carrying_capacity));
        }
        if self.harvest_rate < 0.0 {
            return Err(SimulationError::NegativeHarvest(self.harvest_rate));
        }
        if self.horizon <= 0.0 {
            return Err(SimulationError::NonPositiveHorizon(self.horizon));
        }
        Ok(())
    }

    pub fn vector_field(&self) -> HarvestedLogistic {
        HarvestedLogistic {
            growth_rate: self.growth_rate,
            carrying_capacity: self.carrying_capacity,
            harvest_rate: self.harvest_rate,
        }
    }
}

/// dP/dt = r P (1 - P/K) - H
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarvestedLogistic {
    pub growth_rate: f64,
    pub carrying_capacity: f64,
    pub harvest_rate: f64,
}

impl HarvestedLogistic {
    /// Rate of change at a single population value.
    pub fn rate(&self, population: f64) -> f64 {
        self.growth_rate * population * (1.0 - population / self.carrying_capacity)
            - self.harvest_rate
    }

    /// d/dP of the rate, i.e. the linearization at `population`.
    pub fn slope(&self, population: f64) -> f64 {
        self.growth_rate * (1.0 - 2.0 * population / self.carrying_capacity)
    }
}

impl<T: Scalar> VectorField<T> for HarvestedLogistic {
    fn dimension(&self) -> usize {
        1
    }

    fn derivative(&self, _t: T, x: &[T], out: &mut [T]) {
        let r = T::from_f64(self.growth_rate).unwrap_or_else(T::nan);
        let k = T::from_f64(self.carrying_capacity).unwrap_or_else(T::nan);
        let h = T::from_f64(self.harvest_rate).unwrap_or_else(T::nan);
        out[0] = r * x[0] * (T::one() - x[0] / k) - h;
    }
}

#[cfg(test)]
mod tests {
    use super::{HarvestParams, HarvestedLogistic};
    use crate::error::SimulationError;
    use crate::traits::VectorField;

    fn field() -> HarvestedLogistic {
        HarvestParams::new(80.0, 0.06, 150.0, 1.0, 20.0).vector_field()
    }

    #[test]
    fn rate_vanishes_at_equilibria() {
        let field = field();
        let root = (1.0 - 4.0 / 9.0_f64).sqrt();
        for p in [75.0 * (1.0 + root), 75.0 * (1.0 - root)] {
            assert!(field.rate(p).abs() < 1e-12, "rate at {p} = {}", field.rate(p));
        }
    }

    #[test]
    fn generic_derivative_matches_scalar_rate() {
        let field = field();
        let mut out = [0.0_f64];
        VectorField::<f64>::derivative(&field, 0.0, &[40.0], &mut out);
        assert_eq!(out[0], field.rate(40.0));

        let mut out32 = [0.0_f32];
        VectorField::<f32>::derivative(&field, 0.0, &[40.0], &mut out32);
        assert!((out32[0] as f64 - field.rate(40.0)).abs() < 1e-4);
    }

    #[test]
    fn slope_changes_sign_at_half_capacity() {
        let field = field();
        assert!(field.slope(10.0) > 0.0);
        assert_eq!(field.slope(75.0), 0.0);
        assert!(field.slope(140.0) < 0.0);
    }

    #[test]
    fn validate_reports_each_constraint() {
        let base = HarvestParams::new(80.0, 0.06, 150.0, 5.0, 20.0);
        assert!(base.validate().is_ok());
        assert!(HarvestParams { initial_population: -3.0, ..base }.validate().is_ok());

        assert!(matches!(
            HarvestParams { growth_rate: f64::NAN, ..base }.validate(),
            Err(SimulationError::NonFinite { name: "growth_rate", .. })
        ));
        assert!(matches!(
            HarvestParams { carrying_capacity: 0.0, ..base }.validate(),
            Err(SimulationError::NonPositiveCapacity(_))
        ));
        assert!(matches!(
            HarvestParams { harvest_rate: -1.0, ..base }.validate(),
            Err(SimulationError::NegativeHarvest(_))
        ));
        assert!(matches!(
            HarvestParams { horizon: 0.0, ..base }.validate(),
            Err(SimulationError::NonPositiveHorizon(_))
        ));
    }
}
