//! ReportingFacade: composes engine outputs into one payload.

use std::sync::Arc;

use carbon_core::errors::CarbonResult;
use carbon_core::models::DateRange;
use carbon_core::traits::EmissionStore;
use chrono::NaiveDate;

use super::payload::{CumulativeHumanPayload, DashboardPayload, ReportPayload};
use crate::aggregation::{AggregationEngine, HumanFactorPolicy};
use crate::recommendations::{RecommendationEngine, RecommendationReport};

pub struct ReportingFacade {
    aggregation: AggregationEngine,
    recommendations: RecommendationEngine,
}

impl ReportingFacade {
    pub fn new(store: Arc<dyn EmissionStore>, human_factor: HumanFactorPolicy) -> Self {
        Self {
            aggregation: AggregationEngine::new(Arc::clone(&store), human_factor),
            recommendations: RecommendationEngine::new(store, human_factor),
        }
    }

    pub fn aggregation(&self) -> &AggregationEngine {
        &self.aggregation
    }

    /// The full dashboard for `range`. Fails as a whole if any part fails.
    pub fn dashboard(&self, range: &DateRange) -> CarbonResult<DashboardPayload> {
        let report = self.aggregation.compute_emissions_report(range)?;
        let cumulative = self.aggregation.cumulative_human_stats()?;
        let recommendations = self.recommendations.recommend()?;

        Ok(DashboardPayload {
            report: ReportPayload::from(&report),
            cumulative_human: CumulativeHumanPayload::from(cumulative),
            recommendations,
        })
    }

    /// `dashboard` with optional `YYYY-MM-DD` bounds.
    pub fn dashboard_from_strings(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
        default_window_days: u32,
    ) -> CarbonResult<DashboardPayload> {
        let range = crate::aggregation::resolve_range(start, end, today, default_window_days)?;
        self.dashboard(&range)
    }

    pub fn recommendations(&self) -> CarbonResult<RecommendationReport> {
        self.recommendations.recommend()
    }
}
