//! Equilibrium analysis of the harvested logistic model.
//!
//! Positive equilibria solve r P (1 - P/K) = H, giving
//! P* = (K/2)(1 ± sqrt(1 - 4H/(rK))). They exist only while H does not exceed
//! the maximum sustainable yield H* = rK/4.

use crate::model::HarvestedLogistic;
use crate::simulation::Trajectory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// |H - H*| below this counts as harvesting exactly at the maximum sustainable yield.
pub const CRITICAL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Sustainable,
    Critical,
    Collapse,
}

impl Regime {
    pub fn label(self) -> &'static str {
        match self {
            Regime::Sustainable => "sostenible",
            Regime::Critical => "crítico",
            Regime::Collapse => "colapso",
        }
    }

    /// Label with the comparison that produced it, as shown next to the chart.
    pub fn description(self) -> &'static str {
        match self {
            Regime::Sustainable => "sostenible (H < H*)",
            Regime::Critical => "crítico (H ≈ H*)",
            Regime::Collapse => "colapso (H > H*)",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Unstable,
    /// Double root at H = H*: attracting from above, repelling from below.
    SemiStable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub population: f64,
    /// d(dP/dt)/dP evaluated at the equilibrium.
    pub slope: f64,
    pub stability: Stability,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Equilibria {
    None,
    Single { equilibrium: Equilibrium },
    Pair { stable: Equilibrium, unstable: Equilibrium },
}

impl Equilibria {
    pub fn stable(&self) -> Option<&Equilibrium> {
        match self {
            Equilibria::Pair { stable, .. } => Some(stable),
            _ => None,
        }
    }

    pub fn unstable(&self) -> Option<&Equilibrium> {
        match self {
            Equilibria::Pair { unstable, .. } => Some(unstable),
            _ => None,
        }
    }

    pub fn as_vec(&self) -> Vec<Equilibrium> {
        match *self {
            Equilibria::None => Vec::new(),
            Equilibria::Single { equilibrium } => vec![equilibrium],
            Equilibria::Pair { stable, unstable } => vec![stable, unstable],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarvestAnalysis {
    /// H* = rK/4.
    pub max_sustainable_yield: f64,
    /// 1 - 4H/(rK).
    pub discriminant: f64,
    pub regime: Regime,
    pub equilibria: Equilibria,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    /// r <= 0 or K <= 0: the equilibrium formulas do not apply.
    Invalid,
    Valid(HarvestAnalysis),
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid(_))
    }

    pub fn analysis(&self) -> Option<&HarvestAnalysis> {
        match self {
            Classification::Valid(analysis) => Some(analysis),
            Classification::Invalid => None,
        }
    }

    pub fn regime(&self) -> Option<Regime> {
        self.analysis().map(|analysis| analysis.regime)
    }

    pub fn max_sustainable_yield(&self) -> Option<f64> {
        self.analysis().map(|analysis| analysis.max_sustainable_yield)
    }
}

/// H* = rK/4, or `None` when r or K is not strictly positive.
pub fn max_sustainable_yield(growth_rate: f64, carrying_capacity: f64) -> Option<f64> {
    if growth_rate > 0.0 && carrying_capacity > 0.0 {
        Some(growth_rate * carrying_capacity / 4.0)
    } else {
        None
    }
}

pub fn classify(growth_rate: f64, carrying_capacity: f64, harvest_rate: f64) -> Classification {
    let Some(msy) = max_sustainable_yield(growth_rate, carrying_capacity) else {
        log::warn!("invalid harvest parameters: r = {growth_rate}, K = {carrying_capacity}");
        return Classification::Invalid;
    };

    let discriminant = 1.0 - 4.0 * harvest_rate / (growth_rate * carrying_capacity);

    let regime = if harvest_rate < msy {
        Regime::Sustainable
    } else if (harvest_rate - msy).abs() < CRITICAL_TOLERANCE {
        Regime::Critical
    } else {
        Regime::Collapse
    };

    let field = HarvestedLogistic {
        growth_rate,
        carrying_capacity,
        harvest_rate,
    };
    let half = 0.5 * carrying_capacity;
    let equilibria = if discriminant < 0.0 {
        Equilibria::None
    } else if regime == Regime::Critical {
        Equilibria::Single {
            equilibrium: Equilibrium {
                population: half,
                slope: 0.0,
                stability: Stability::SemiStable,
            },
        }
    } else {
        let root = discriminant.sqrt();
        let upper = half * (1.0 + root);
        let lower = half * (1.0 - root);
        Equilibria::Pair {
            stable: Equilibrium {
                population: upper,
                slope: field.slope(upper),
                stability: Stability::Stable,
            },
            unstable: Equilibrium {
                population: lower,
                slope: field.slope(lower),
                stability: Stability::Unstable,
            },
        }
    };

    Classification::Valid(HarvestAnalysis {
        max_sustainable_yield: msy,
        discriminant,
        regime,
        equilibria,
    })
}

/// Harvest exceeds H* and the trajectory was cut off at zero.
///
/// This only inspects the last sample, so a trajectory that lands on zero at the
/// final step counts the same as one truncated earlier.
pub fn is_extinct(
    classification: &Classification,
    harvest_rate: f64,
    trajectory: &Trajectory,
) -> bool {
    let Some(msy) = classification.max_sustainable_yield() else {
        return false;
    };
    trajectory.len() >= 2
        && trajectory.final_population() == Some(0.0)
        && harvest_rate > msy
}
