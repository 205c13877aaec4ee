//! Population emissions over a window.

use carbon_core::models::HumanEmission;

use crate::buckets::TrendBuckets;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HumanAggregate {
    pub total_emissions: f64,
    /// Mean over fetched rows, truncated.
    pub avg_student_count: u64,
    /// Mean over fetched rows, truncated.
    pub avg_staff_count: u64,
    pub trends: TrendBuckets,
    /// Per-day rows, ordered by date.
    pub population: Vec<HumanEmission>,
}

impl HumanAggregate {
    pub fn avg_total_count(&self) -> u64 {
        self.avg_student_count + self.avg_staff_count
    }
}

pub fn aggregate_human(rows: Vec<HumanEmission>) -> HumanAggregate {
    if rows.is_empty() {
        return HumanAggregate::default();
    }

    let n = rows.len() as u64;
    let students: u64 = rows.iter().map(|r| u64::from(r.student_count)).sum();
    let staff: u64 = rows.iter().map(|r| u64::from(r.staff_count)).sum();

    HumanAggregate {
        total_emissions: rows.iter().map(|r| r.emissions_tonnes).sum(),
        avg_student_count: students / n,
        avg_staff_count: staff / n,
        trends: rows.iter().map(|r| (r.date, r.emissions_tonnes)).collect(),
        population: rows,
    }
}
