//! Recommendation generation.

use std::sync::Arc;

use carbon_core::errors::CarbonResult;
use carbon_core::recommendations_span;
use carbon_core::traits::EmissionStore;

use super::templates::{self, ESTIMATED_TOTAL_REDUCTION};
use super::{Priority, RecommendationInput, RecommendationReport, RecommendationSummary};
use crate::aggregation::HumanFactorPolicy;

/// Build the advisory list. Pure; the order is always source, human, general.
pub fn generate(input: &RecommendationInput) -> RecommendationReport {
    let mut recommendations = Vec::new();

    let all_sources: f64 = input.source_totals.iter().map(|s| s.total_emissions).sum();
    let top = input
        .source_totals
        .iter()
        .reduce(|best, s| if s.total_emissions > best.total_emissions { s } else { best });
    if let Some(top) = top {
        let share = if all_sources > 0.0 {
            top.total_emissions / all_sources * 100.0
        } else {
            0.0
        };
        if let Some(rec) =
            templates::source_template(&top.source_type, top.total_emissions, share)
        {
            recommendations.push(rec);
        }
    }

    if input.human_total_emissions > 0.0 {
        recommendations.push(templates::human_advisory(
            input.human_total_emissions,
            input.average_population,
        ));
    }

    recommendations.extend(templates::general());

    let summary = RecommendationSummary {
        total_recommendations: recommendations.len(),
        high_priority_count: recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .count(),
        estimated_total_reduction: ESTIMATED_TOTAL_REDUCTION.to_string(),
    };

    RecommendationReport {
        recommendations,
        summary,
    }
}

/// Reads all-time totals from the store and runs `generate`.
pub struct RecommendationEngine {
    store: Arc<dyn EmissionStore>,
    human_factor: HumanFactorPolicy,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn EmissionStore>, human_factor: HumanFactorPolicy) -> Self {
        Self {
            store,
            human_factor,
        }
    }

    /// Gather the all-time input. Fails if either query fails.
    pub fn input(&self) -> CarbonResult<RecommendationInput> {
        let source_totals = self.store.fetch_source_totals_alltime()?;
        let kg = self.human_factor.resolve(self.store.as_ref())?;
        let human = self.store.fetch_human_cumulative(kg)?;
        Ok(RecommendationInput {
            source_totals,
            human_total_emissions: human.total_emissions,
            average_population: human.average_population(),
        })
    }

    pub fn recommend(&self) -> CarbonResult<RecommendationReport> {
        let _span = recommendations_span!().entered();
        let report = generate(&self.input()?);
        tracing::debug!(
            total = report.summary.total_recommendations,
            high = report.summary.high_priority_count,
            "recommendations generated"
        );
        Ok(report)
    }
}
