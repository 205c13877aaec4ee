//! Advisory recommendations from all-time source totals.
//!
//! Order is fixed: the top source's template, the population advisory, then
//! the four general recommendations.

pub mod engine;
pub mod templates;

use serde::{Deserialize, Serialize};

pub use engine::{generate, RecommendationEngine};

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Relative implementation cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostTier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub actions: Vec<String>,
    pub expected_reduction: String,
    pub cost: CostTier,
    pub timeframe: String,
    /// Source type this targets, for source-specific entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// All-time figures the engine consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationInput {
    /// Descending by total.
    pub source_totals: Vec<carbon_core::models::SourceTotal>,
    pub human_total_emissions: f64,
    pub average_population: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub total_recommendations: usize,
    pub high_priority_count: usize,
    pub estimated_total_reduction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<Recommendation>,
    pub summary: RecommendationSummary,
}
