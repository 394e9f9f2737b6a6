//! Plot-ready series built from simulation results.
//!
//! Nothing here knows about a plotting library; the UI maps each [`SeriesRole`]
//! to its own trace style.

use crate::equilibrium::Equilibria;
use crate::logistic::LogisticCurve;
use crate::simulation::HarvestReport;
use serde::{Deserialize, Serialize};

/// Roughly how many sample markers are drawn over a trajectory.
pub const MARKER_TARGET: usize = 30;

/// Headroom above the tallest curve on the y axis.
pub const Y_HEADROOM: f64 = 1.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    Population,
    Samples,
    CarryingCapacity,
    StableEquilibrium,
    UnstableEquilibrium,
    CriticalEquilibrium,
    Inflection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub role: SeriesRole,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    fn new(name: &str, role: SeriesRole, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            role,
            x,
            y,
        }
    }

    /// Horizontal line at `level`, sampled on the same abscissae as `x`.
    fn level(name: &str, role: SeriesRole, x: &[f64], level: f64) -> Self {
        Self::new(name, role, x.to_vec(), vec![level; x.len()])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalMarker {
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub series: Vec<Series>,
    pub markers: Vec<VerticalMarker>,
}

impl ChartModel {
    pub fn series_by_role(&self, role: SeriesRole) -> Option<&Series> {
        self.series.iter().find(|series| series.role == role)
    }
}

/// Stride that thins `len` points down to about [`MARKER_TARGET`] markers.
pub fn marker_stride(len: usize) -> usize {
    (len / MARKER_TARGET).max(1)
}

fn every_nth(values: &[f64], stride: usize) -> Vec<f64> {
    values.iter().copied().step_by(stride).collect()
}

pub fn harvest_chart(report: &HarvestReport) -> ChartModel {
    let capacity = report.params.carrying_capacity;
    let mut chart = ChartModel {
        title: "Logístico con cosecha".to_string(),
        x_label: "Tiempo (t)".to_string(),
        y_label: "Tamaño poblacional / biomasa P(t)".to_string(),
        x_range: [0.0, report.params.horizon],
        y_range: [0.0, capacity * Y_HEADROOM],
        series: Vec::new(),
        markers: Vec::new(),
    };

    let Some(trajectory) = &report.trajectory else {
        return chart;
    };
    let times = &trajectory.times;

    let stride = marker_stride(trajectory.len());
    chart.series.push(Series::new(
        "P(t)",
        SeriesRole::Population,
        times.clone(),
        trajectory.populations.clone(),
    ));
    chart.series.push(Series::new(
        "Muestras",
        SeriesRole::Samples,
        every_nth(times, stride),
        every_nth(&trajectory.populations, stride),
    ));
    chart.series.push(Series::level(
        "Capacidad de carga K",
        SeriesRole::CarryingCapacity,
        times,
        capacity,
    ));

    if let Some(analysis) = report.classification.analysis() {
        match analysis.equilibria {
            Equilibria::Pair { stable, unstable } => {
                chart.series.push(Series::level(
                    "Equilibrio estable",
                    SeriesRole::StableEquilibrium,
                    times,
                    stable.population,
                ));
                chart.series.push(Series::level(
                    "Equilibrio inestable",
                    SeriesRole::UnstableEquilibrium,
                    times,
                    unstable.population,
                ));
            }
            Equilibria::Single { equilibrium } => {
                chart.series.push(Series::level(
                    "Equilibrio crítico",
                    SeriesRole::CriticalEquilibrium,
                    times,
                    equilibrium.population,
                ));
            }
            Equilibria::None => {}
        }
    }

    if report.extinct {
        if let Some(t_ext) = trajectory.final_time() {
            chart.markers.push(VerticalMarker {
                x: t_ext,
                label: "Extinción".to_string(),
            });
        }
    }

    let peak = trajectory.peak_population().unwrap_or(0.0);
    chart.y_range = [0.0, capacity.max(peak) * Y_HEADROOM];
    chart
}

pub fn logistic_chart(curve: &LogisticCurve) -> ChartModel {
    let capacity = curve.params.carrying_capacity;
    let t_end = curve.times.last().copied().unwrap_or(0.0);
    let mut series = vec![
        Series::new(
            "Ecuación Logística",
            SeriesRole::Population,
            curve.times.clone(),
            curve.populations.clone(),
        ),
        Series::level(
            "Capacidad de carga (K)",
            SeriesRole::CarryingCapacity,
            &curve.times,
            capacity,
        ),
    ];
    if let Some(point) = curve.inflection {
        series.push(Series::new(
            "Inflexión (P=K/2)",
            SeriesRole::Inflection,
            vec![point.time],
            vec![point.population],
        ));
    }

    let peak = curve.populations.iter().copied().fold(capacity, f64::max);
    ChartModel {
        title: "Modelo logístico con capacidad de carga".to_string(),
        x_label: "Tiempo (t)".to_string(),
        y_label: "Población P(t)".to_string(),
        x_range: [0.0, t_end],
        y_range: [0.0, peak * Y_HEADROOM],
        series,
        markers: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{harvest_chart, logistic_chart, marker_stride, SeriesRole};
    use crate::config::SimulationSettings;
    use crate::logistic::LogisticParams;
    use crate::model::HarvestParams;
    use crate::simulation::analyze;

    fn chart_for(params: HarvestParams) -> super::ChartModel {
        let report = analyze(&params, &SimulationSettings::default()).expect("analysis");
        harvest_chart(&report)
    }

    #[test]
    fn marker_stride_targets_thirty_points() {
        assert_eq!(marker_stride(0), 1);
        assert_eq!(marker_stride(29), 1);
        assert_eq!(marker_stride(401), 13);
    }

    #[test]
    fn sustainable_chart_has_both_equilibrium_lines() {
        let chart = chart_for(HarvestParams::new(80.0, 0.06, 150.0, 1.0, 20.0));
        let population = chart.series_by_role(SeriesRole::Population).expect("population");
        assert_eq!(population.x.len(), 401);

        let samples = chart.series_by_role(SeriesRole::Samples).expect("samples");
        assert_eq!(samples.x.len(), 31);
        assert_eq!(samples.x[1], population.x[13]);

        let stable = chart
            .series_by_role(SeriesRole::StableEquilibrium)
            .expect("stable line");
        assert_eq!(stable.y.len(), 401);
        assert!(chart.series_by_role(SeriesRole::UnstableEquilibrium).is_some());
        assert!(chart.markers.is_empty());
        assert_eq!(chart.x_range, [0.0, 20.0]);
        assert!((chart.y_range[1] - 165.0).abs() < 1e-9);
    }

    #[test]
    fn collapse_chart_marks_extinction() {
        let chart = chart_for(HarvestParams::new(80.0, 0.06, 150.0, 5.0, 40.0));
        assert!(chart.series_by_role(SeriesRole::StableEquilibrium).is_none());
        assert_eq!(chart.markers.len(), 1);
        let marker = &chart.markers[0];
        assert_eq!(marker.label, "Extinción");
        assert!(marker.x > 20.0 && marker.x < 30.0);
    }

    #[test]
    fn critical_chart_draws_single_line_at_half_capacity() {
        let chart = chart_for(HarvestParams::new(80.0, 0.06, 150.0, 2.25, 20.0));
        let line = chart
            .series_by_role(SeriesRole::CriticalEquilibrium)
            .expect("critical line");
        assert!(line.y.iter().all(|y| *y == 75.0));
        assert!(chart.series_by_role(SeriesRole::StableEquilibrium).is_none());
    }

    #[test]
    fn critical_chart_above_msy_draws_no_equilibrium_line() {
        let chart = chart_for(HarvestParams::new(80.0, 0.06, 150.0, 2.25 + 5e-10, 20.0));
        assert!(chart.series_by_role(SeriesRole::CriticalEquilibrium).is_none());
        assert!(chart.series_by_role(SeriesRole::StableEquilibrium).is_none());
    }

    #[test]
    fn y_range_grows_with_initial_population_above_capacity() {
        let chart = chart_for(HarvestParams::new(300.0, 0.06, 150.0, 0.0, 20.0));
        assert!((chart.y_range[1] - 330.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_report_yields_empty_chart() {
        let chart = chart_for(HarvestParams::new(80.0, 0.0, 150.0, 5.0, 20.0));
        assert!(chart.series.is_empty());
        assert_eq!(chart.x_range, [0.0, 20.0]);
    }

    #[test]
    fn logistic_chart_includes_inflection_marker() {
        let curve = LogisticParams::default().sample(200.0, 15).expect("curve");
        let chart = logistic_chart(&curve);
        assert_eq!(chart.series.len(), 3);
        let inflection = chart.series_by_role(SeriesRole::Inflection).expect("inflection");
        assert_eq!(inflection.y, vec![75.0]);
        assert_eq!(chart.x_range, [0.0, 200.0]);
    }
}
