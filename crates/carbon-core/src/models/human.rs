//! Human population records and their derived emission rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::emissions_tonnes;

/// Head count for one campus day. At most one row per date.
///
/// `total_count` is never stored as authoritative; it is always derived
/// from the two counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanPopulationRecord {
    pub date: NaiveDate,
    pub student_count: u32,
    pub staff_count: u32,
}

impl HumanPopulationRecord {
    pub fn new(date: NaiveDate, student_count: u32, staff_count: u32) -> Self {
        Self {
            date,
            student_count,
            staff_count,
        }
    }

    pub fn total_count(&self) -> u64 {
        u64::from(self.student_count) + u64::from(self.staff_count)
    }

    /// Emissions for this day at `kg_per_person_day`.
    pub fn emissions_tonnes(&self, kg_per_person_day: f64) -> f64 {
        emissions_tonnes(self.total_count() as f64, kg_per_person_day)
    }
}

/// A population row with its emissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanEmission {
    pub date: NaiveDate,
    pub student_count: u32,
    pub staff_count: u32,
    pub total_count: u64,
    pub emissions_tonnes: f64,
}

impl HumanEmission {
    pub fn from_record(record: &HumanPopulationRecord, kg_per_person_day: f64) -> Self {
        Self {
            date: record.date,
            student_count: record.student_count,
            staff_count: record.staff_count,
            total_count: record.total_count(),
            emissions_tonnes: record.emissions_tonnes(kg_per_person_day),
        }
    }
}

/// All-time population statistics, ignoring any report window.
/// Averages are truncated toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeHumanStats {
    pub total_emissions: f64,
    pub record_count: u64,
    pub avg_students: u64,
    pub avg_staff: u64,
}

impl CumulativeHumanStats {
    pub fn average_population(&self) -> u64 {
        self.avg_students + self.avg_staff
    }
}
