//! Typed records for every store entity plus the derived emission samples.

pub mod activity;
pub mod date_range;
pub mod factor;
pub mod human;

pub use activity::{ActivityEmission, ActivityRecord, SourceTotal};
pub use date_range::DateRange;
pub use factor::EmissionFactor;
pub use human::{CumulativeHumanStats, HumanEmission, HumanPopulationRecord};

use crate::constants::KG_PER_TONNE;

/// Convert a raw quantity to tonnes CO2e: `raw_value * factor / 1000`.
pub fn emissions_tonnes(raw_value: f64, factor_kg: f64) -> f64 {
    raw_value * factor_kg / KG_PER_TONNE
}
