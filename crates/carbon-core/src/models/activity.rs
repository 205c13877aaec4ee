//! Raw activity readings and their joined emission rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::emissions_tonnes;

/// A dated raw reading. Several rows may share a date and source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub source_type: String,
    pub raw_value: f64,
    pub unit: String,
}

impl ActivityRecord {
    pub fn new(
        date: NaiveDate,
        source_type: impl Into<String>,
        raw_value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            date,
            source_type: source_type.into(),
            raw_value,
            unit: unit.into(),
        }
    }
}

/// An activity row inner-joined to its factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEmission {
    pub date: NaiveDate,
    pub source_type: String,
    pub raw_value: f64,
    pub unit: String,
    pub factor: f64,
    pub emissions_tonnes: f64,
}

impl ActivityEmission {
    /// Join a record with its factor, computing the tonnes at full precision.
    pub fn from_record(record: ActivityRecord, factor: f64) -> Self {
        let emissions_tonnes = emissions_tonnes(record.raw_value, factor);
        Self {
            date: record.date,
            source_type: record.source_type,
            raw_value: record.raw_value,
            unit: record.unit,
            factor,
            emissions_tonnes,
        }
    }
}

/// All-time emissions for one source type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTotal {
    pub source_type: String,
    pub total_emissions: f64,
}
