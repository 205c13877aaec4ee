//! Emission conversion configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HUMAN_FACTOR_KG;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmissionsConfig {
    /// kg CO2e per person per day. Default: 1.0.
    pub human_factor_kg: Option<f64>,
    /// Read the `human_daily` factor row instead of the constant. Default: false.
    pub human_factor_from_table: Option<bool>,
}

impl EmissionsConfig {
    pub fn effective_human_factor_kg(&self) -> f64 {
        self.human_factor_kg.unwrap_or(DEFAULT_HUMAN_FACTOR_KG)
    }

    pub fn effective_human_factor_from_table(&self) -> bool {
        self.human_factor_from_table.unwrap_or(false)
    }
}
