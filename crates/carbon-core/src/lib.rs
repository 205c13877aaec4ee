//! # carbon-core
//!
//! Foundation crate for the campus carbon ledger.
//! Defines the typed records, the store trait, auth contexts, errors,
//! config, tracing setup, and constants. Every other crate depends on this.

pub mod auth;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

pub use config::CarbonConfig;
pub use errors::{CarbonError, CarbonErrorCode, CarbonResult};
pub use models::{
    ActivityEmission, ActivityRecord, CumulativeHumanStats, DateRange, EmissionFactor,
    HumanEmission, HumanPopulationRecord, SourceTotal,
};
pub use traits::EmissionStore;
