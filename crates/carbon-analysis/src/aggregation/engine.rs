//! AggregationEngine: owns the store client and computes windowed reports.

use std::sync::Arc;
use std::time::Instant;

use carbon_core::config::EmissionsConfig;
use carbon_core::constants::{DEFAULT_HUMAN_FACTOR_KG, SOURCE_HUMAN_DAILY};
use carbon_core::errors::{CarbonResult, InputError, StorageError};
use carbon_core::models::{CumulativeHumanStats, DateRange};
use carbon_core::report_span;
use carbon_core::traits::EmissionStore;
use chrono::NaiveDate;

use super::activity::aggregate_activity;
use super::human::aggregate_human;
use super::EmissionsReport;

/// Where the kg-per-person-day figure for population emissions comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HumanFactorPolicy {
    /// A fixed figure, 1.0 by default.
    Constant(f64),
    /// The `human_daily` factor row, or `fallback` when the row is missing.
    FromFactorTable { fallback: f64 },
}

impl Default for HumanFactorPolicy {
    fn default() -> Self {
        Self::Constant(DEFAULT_HUMAN_FACTOR_KG)
    }
}

impl HumanFactorPolicy {
    pub fn from_config(config: &EmissionsConfig) -> Self {
        let kg = config.effective_human_factor_kg();
        if config.effective_human_factor_from_table() {
            Self::FromFactorTable { fallback: kg }
        } else {
            Self::Constant(kg)
        }
    }

    /// Resolve the factor. `Constant` never touches the store.
    pub fn resolve(&self, store: &dyn EmissionStore) -> Result<f64, StorageError> {
        match *self {
            Self::Constant(kg) => Ok(kg),
            Self::FromFactorTable { fallback } => {
                let factor = store.get_factor(SOURCE_HUMAN_DAILY)?;
                if factor.is_none() {
                    tracing::debug!(fallback, "no human_daily factor row, using fallback");
                }
                Ok(factor.map_or(fallback, |f| f.factor))
            }
        }
    }
}

/// Resolve optional `YYYY-MM-DD` bounds into a window.
///
/// When either bound is absent the trailing `default_window_days` window
/// ending on `today` applies. Reversed bounds are swapped.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
    default_window_days: u32,
) -> Result<DateRange, InputError> {
    match (start, end) {
        (Some(start), Some(end)) => DateRange::parse(start, end),
        _ => DateRange::trailing(today, default_window_days),
    }
}

pub struct AggregationEngine {
    store: Arc<dyn EmissionStore>,
    human_factor: HumanFactorPolicy,
}

impl AggregationEngine {
    pub fn new(store: Arc<dyn EmissionStore>, human_factor: HumanFactorPolicy) -> Self {
        Self {
            store,
            human_factor,
        }
    }

    pub fn store(&self) -> &Arc<dyn EmissionStore> {
        &self.store
    }

    pub fn human_factor_policy(&self) -> HumanFactorPolicy {
        self.human_factor
    }

    /// Compute the full report for `range`.
    ///
    /// Read-only. Any failed query fails the whole call; empty windows yield
    /// zeroed aggregates.
    pub fn compute_emissions_report(&self, range: &DateRange) -> CarbonResult<EmissionsReport> {
        let _span = report_span!(range.start(), range.end()).entered();
        let started = Instant::now();

        let previous_range = range.previous_period()?;
        let human_factor_kg = self.human_factor.resolve(self.store.as_ref())?;

        let current_rows = self.store.fetch_activity(range)?;
        let previous_rows = self.store.fetch_activity(&previous_range)?;
        let human_rows = self.store.fetch_human(range, human_factor_kg)?;

        let activity = aggregate_activity(&current_rows);
        let previous_total: f64 = previous_rows.iter().map(|r| r.emissions_tonnes).sum();
        let kpis = activity.kpis(previous_total);

        tracing::info!(
            activity_rows = current_rows.len(),
            previous_rows = previous_rows.len(),
            human_rows = human_rows.len(),
            report_time_ms = started.elapsed().as_millis() as u64,
            "emissions report computed"
        );

        Ok(EmissionsReport {
            range: *range,
            previous_range,
            kpis,
            activity,
            previous_total,
            human: aggregate_human(human_rows),
            human_factor_kg,
        })
    }

    /// Parse optional bounds, then compute the report.
    pub fn compute_emissions_report_from_strings(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
        default_window_days: u32,
    ) -> CarbonResult<EmissionsReport> {
        let range = resolve_range(start, end, today, default_window_days)?;
        self.compute_emissions_report(&range)
    }

    /// All-time population statistics, ignoring any window.
    pub fn cumulative_human_stats(&self) -> CarbonResult<CumulativeHumanStats> {
        let kg = self.human_factor.resolve(self.store.as_ref())?;
        Ok(self.store.fetch_human_cumulative(kg)?)
    }
}
