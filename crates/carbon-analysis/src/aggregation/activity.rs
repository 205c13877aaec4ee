//! Activity emissions: totals, per-source breakdown, trends, energy KPI.

use std::collections::HashMap;

use carbon_core::constants::{ENERGY_KPI_SOURCE, NO_SOURCE};
use carbon_core::models::ActivityEmission;

use super::Kpis;
use crate::buckets::TrendBuckets;

/// One source's share of a window.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBreakdown {
    pub source_type: String,
    pub emissions: f64,
    /// Share of the window total, 0-100. Zero when the total is zero.
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityAggregate {
    pub total_emissions: f64,
    /// Descending by emissions; equal totals keep first-seen order.
    pub breakdown: Vec<SourceBreakdown>,
    pub trends: TrendBuckets,
    pub energy_saved: f64,
    pub row_count: usize,
}

impl ActivityAggregate {
    /// The largest source, or `None` for an empty window.
    pub fn biggest_source(&self) -> Option<&SourceBreakdown> {
        self.breakdown.first()
    }

    /// KPIs for this window against a previous-period total.
    pub fn kpis(&self, previous_total: f64) -> Kpis {
        let (biggest_source, biggest_source_percent) = match self.biggest_source() {
            Some(top) => (top.source_type.clone(), top.percentage),
            None => (NO_SOURCE.to_string(), 0.0),
        };
        Kpis {
            total_emissions: self.total_emissions,
            percent_change: percent_change(self.total_emissions, previous_total),
            biggest_source,
            biggest_source_percent,
            energy_saved: self.energy_saved,
        }
    }
}

/// Fold joined activity rows into an aggregate.
pub fn aggregate_activity(rows: &[ActivityEmission]) -> ActivityAggregate {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut trends = TrendBuckets::new();
    let mut total_emissions = 0.0;
    let mut energy_saved = 0.0;

    for row in rows {
        total_emissions += row.emissions_tonnes;
        trends.add(row.date, row.emissions_tonnes);

        if row.source_type == ENERGY_KPI_SOURCE {
            energy_saved += row.raw_value;
        }

        let slot = *index.entry(row.source_type.as_str()).or_insert_with(|| {
            totals.push((row.source_type.clone(), 0.0));
            totals.len() - 1
        });
        totals[slot].1 += row.emissions_tonnes;
    }

    // Stable sort: ties stay in first-seen order.
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    let breakdown = totals
        .into_iter()
        .map(|(source_type, emissions)| SourceBreakdown {
            percentage: share(emissions, total_emissions),
            source_type,
            emissions,
        })
        .collect();

    ActivityAggregate {
        total_emissions,
        breakdown,
        trends,
        energy_saved,
        row_count: rows.len(),
    }
}

/// `(current - previous) / previous * 100`, or 0 when `previous` is 0.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
