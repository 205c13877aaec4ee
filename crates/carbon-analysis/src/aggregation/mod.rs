//! Windowed emissions aggregation.
//!
//! `activity` and `human` are pure folds over fetched rows; `engine` owns the
//! store, resolves the window, and issues the queries.

pub mod activity;
pub mod engine;
pub mod human;

use carbon_core::models::DateRange;
use serde::{Deserialize, Serialize};

pub use activity::{aggregate_activity, percent_change, ActivityAggregate, SourceBreakdown};
pub use engine::{resolve_range, AggregationEngine, HumanFactorPolicy};
pub use human::{aggregate_human, HumanAggregate};

/// Headline figures for a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_emissions: f64,
    pub percent_change: f64,
    pub biggest_source: String,
    pub biggest_source_percent: f64,
    /// Electricity kWh in the window, unconverted.
    pub energy_saved: f64,
}

/// Everything computed for one report window, at full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionsReport {
    pub range: DateRange,
    pub previous_range: DateRange,
    pub kpis: Kpis,
    pub activity: ActivityAggregate,
    pub previous_total: f64,
    pub human: HumanAggregate,
    /// kg CO2e per person-day used for `human`.
    pub human_factor_kg: f64,
}
