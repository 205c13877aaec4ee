//! Emission factor table rows.

use serde::{Deserialize, Serialize};

/// Conversion factor from one unit of a source's activity to kg CO2e.
/// One row per `source_type`; writes upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub source_type: String,
    pub factor: f64,
    pub factor_unit: String,
}

impl EmissionFactor {
    pub fn new(
        source_type: impl Into<String>,
        factor: f64,
        factor_unit: impl Into<String>,
    ) -> Self {
        Self {
            source_type: source_type.into(),
            factor,
            factor_unit: factor_unit.into(),
        }
    }
}
