//! Browser bindings for `harvest_core`.
//!
//! The dashboard pages call into these from their slider callbacks and hand the
//! returned chart models straight to the plotting layer.

mod harvest;
mod logistic;

pub use harvest::WasmHarvestModel;
pub use logistic::logistic_view;
