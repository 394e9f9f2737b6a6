//! The `harvest_core` crate is the numerical engine behind the population-model
//! demonstrations: logistic growth, and logistic growth under constant harvesting.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `VectorField` (ODE right-hand sides),
//!   `Steppable` (fixed-step integrators).
//! - **Simulation**: RK4 trajectories of the harvested model with extinction truncation.
//! - **Equilibrium**: maximum sustainable yield, equilibria and regime classification.
//! - **Logistic**: closed-form harvest-free solution and its inflection point.
//! - **Chart**: plot-ready series assembled from results, kept apart from the numerics.

pub mod chart;
pub mod config;
pub mod equilibrium;
pub mod error;
pub mod logistic;
pub mod model;
pub mod simulation;
pub mod solvers;
pub mod traits;

pub use equilibrium::{classify, Classification, Regime};
pub use error::{ConfigError, LogisticError, SimulationError};
pub use model::HarvestParams;
pub use simulation::{analyze, simulate, HarvestReport, Trajectory};
