//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WINDOW_DAYS;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Trailing window used when a report has no range. Default: 180.
    pub default_window_days: Option<u32>,
}

impl ReportConfig {
    pub fn effective_default_window_days(&self) -> u32 {
        self.default_window_days.unwrap_or(DEFAULT_WINDOW_DAYS)
    }
}
