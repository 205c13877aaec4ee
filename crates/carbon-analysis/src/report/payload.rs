//! Serializable report payloads.
//!
//! Figures are carried at full precision and rounded only when serialized:
//! 2 decimals for emissions and period-over-period change, 3 for per-record
//! human emissions, 1 for shares, 0 for energy.

use carbon_core::models::{CumulativeHumanStats, HumanEmission};
use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregation::{EmissionsReport, HumanAggregate, Kpis, SourceBreakdown};
use crate::buckets::TrendBuckets;
use crate::recommendations::RecommendationReport;

pub(crate) mod round {
    use serde::Serializer;

    pub fn to_places(value: f64, places: i32) -> f64 {
        let scale = 10f64.powi(places);
        (value * scale).round() / scale
    }

    pub fn zero<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(to_places(*v, 0))
    }

    pub fn one<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(to_places(*v, 1))
    }

    pub fn two<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(to_places(*v, 2))
    }

    pub fn three<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(to_places(*v, 3))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiPayload {
    #[serde(serialize_with = "round::two")]
    pub total_emissions: f64,
    #[serde(serialize_with = "round::two")]
    pub percent_change: f64,
    pub biggest_source: String,
    #[serde(serialize_with = "round::one")]
    pub biggest_source_percent: f64,
    #[serde(serialize_with = "round::zero")]
    pub energy_saved: f64,
}

impl From<&Kpis> for KpiPayload {
    fn from(k: &Kpis) -> Self {
        Self {
            total_emissions: k.total_emissions,
            percent_change: k.percent_change,
            biggest_source: k.biggest_source.clone(),
            biggest_source_percent: k.biggest_source_percent,
            energy_saved: k.energy_saved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    #[serde(serialize_with = "round::two")]
    pub emissions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPoint {
    pub label: String,
    #[serde(serialize_with = "round::two")]
    pub emissions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: String,
    #[serde(serialize_with = "round::two")]
    pub emissions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyPoint {
    pub year: i32,
    #[serde(serialize_with = "round::two")]
    pub emissions: f64,
}

/// One trend series per granularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendSeries {
    pub daily_trend: Vec<DailyPoint>,
    pub weekly_trend: Vec<WeeklyPoint>,
    pub monthly_trend: Vec<MonthlyPoint>,
    pub yearly_trend: Vec<YearlyPoint>,
}

impl From<&TrendBuckets> for TrendSeries {
    fn from(b: &TrendBuckets) -> Self {
        Self {
            daily_trend: b
                .daily
                .iter()
                .map(|(date, &emissions)| DailyPoint {
                    date: *date,
                    emissions,
                })
                .collect(),
            weekly_trend: b
                .weekly
                .iter()
                .map(|(label, &emissions)| WeeklyPoint {
                    label: label.clone(),
                    emissions,
                })
                .collect(),
            monthly_trend: b
                .monthly
                .iter()
                .map(|(month, &emissions)| MonthlyPoint {
                    month: month.clone(),
                    emissions,
                })
                .collect(),
            yearly_trend: b
                .yearly
                .iter()
                .map(|(&year, &emissions)| YearlyPoint { year, emissions })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcePayload {
    pub source: String,
    #[serde(serialize_with = "round::two")]
    pub emissions: f64,
    #[serde(serialize_with = "round::one")]
    pub percentage: f64,
}

impl From<&SourceBreakdown> for SourcePayload {
    fn from(s: &SourceBreakdown) -> Self {
        Self {
            source: s.source_type.clone(),
            emissions: s.emissions,
            percentage: s.percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationPoint {
    pub date: NaiveDate,
    pub students: u32,
    pub staff: u32,
    pub total: u64,
    #[serde(serialize_with = "round::three")]
    pub emissions: f64,
}

impl From<&HumanEmission> for PopulationPoint {
    fn from(h: &HumanEmission) -> Self {
        Self {
            date: h.date,
            students: h.student_count,
            staff: h.staff_count,
            total: h.total_count,
            emissions: h.emissions_tonnes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanPayload {
    #[serde(serialize_with = "round::two")]
    pub total_emissions: f64,
    pub avg_student_count: u64,
    pub avg_staff_count: u64,
    pub avg_total_count: u64,
    #[serde(flatten)]
    pub trends: TrendSeries,
    pub population_data: Vec<PopulationPoint>,
}

impl From<&HumanAggregate> for HumanPayload {
    fn from(h: &HumanAggregate) -> Self {
        Self {
            total_emissions: h.total_emissions,
            avg_student_count: h.avg_student_count,
            avg_staff_count: h.avg_staff_count,
            avg_total_count: h.avg_total_count(),
            trends: TrendSeries::from(&h.trends),
            population_data: h.population.iter().map(PopulationPoint::from).collect(),
        }
    }
}

/// The report window echoed back with its comparison window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowPayload {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub previous_start: NaiveDate,
    pub previous_end: NaiveDate,
}

/// The windowed report as served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPayload {
    pub window: WindowPayload,
    pub kpis: KpiPayload,
    #[serde(flatten)]
    pub trends: TrendSeries,
    pub source_breakdown: Vec<SourcePayload>,
    pub human_emissions: HumanPayload,
}

impl From<&EmissionsReport> for ReportPayload {
    fn from(r: &EmissionsReport) -> Self {
        Self {
            window: WindowPayload {
                start: r.range.start(),
                end: r.range.end(),
                previous_start: r.previous_range.start(),
                previous_end: r.previous_range.end(),
            },
            kpis: KpiPayload::from(&r.kpis),
            trends: TrendSeries::from(&r.activity.trends),
            source_breakdown: r.activity.breakdown.iter().map(SourcePayload::from).collect(),
            human_emissions: HumanPayload::from(&r.human),
        }
    }
}

/// All-time population statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativeHumanPayload {
    #[serde(serialize_with = "round::two")]
    pub total_emissions_tonnes: f64,
    pub total_records: u64,
    pub average_population: u64,
    pub average_students: u64,
    pub average_staff: u64,
}

impl From<CumulativeHumanStats> for CumulativeHumanPayload {
    fn from(s: CumulativeHumanStats) -> Self {
        Self {
            total_emissions_tonnes: s.total_emissions,
            total_records: s.record_count,
            average_population: s.average_population(),
            average_students: s.avg_students,
            average_staff: s.avg_staff,
        }
    }
}

/// Windowed report, all-time population stats, and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPayload {
    #[serde(flatten)]
    pub report: ReportPayload,
    pub cumulative_human: CumulativeHumanPayload,
    pub recommendations: RecommendationReport,
}
