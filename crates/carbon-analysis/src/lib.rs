//! # carbon-analysis
//!
//! The reporting core: aggregation over a date window, all-time
//! recommendations, the dashboard façade, and the validated write paths.
//! Everything here talks to storage through `carbon_core::EmissionStore`.

pub mod aggregation;
pub mod buckets;
pub mod population;
pub mod recommendations;
pub mod report;
pub mod service;

pub use aggregation::{AggregationEngine, EmissionsReport, HumanFactorPolicy};
pub use recommendations::{RecommendationEngine, RecommendationReport};
pub use report::{DashboardPayload, ReportingFacade};
pub use service::CarbonService;
