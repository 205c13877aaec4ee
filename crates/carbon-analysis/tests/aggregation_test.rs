//! Windowed aggregation: totals, breakdown, trends, comparisons.

mod common;

use std::sync::Arc;

use carbon_analysis::aggregation::{aggregate_activity, percent_change, resolve_range};
use carbon_analysis::report::ReportPayload;
use carbon_analysis::{AggregationEngine, HumanFactorPolicy};
use carbon_core::errors::{CarbonError, CarbonErrorCode, InputError, StorageError};
use carbon_core::models::{
    ActivityEmission, ActivityRecord, DateRange, EmissionFactor, HumanPopulationRecord,
};
use carbon_core::traits::EmissionStore;
use common::{d, sqlite, FakeStore};
use proptest::prelude::*;
use serde_json::json;

fn engine(store: Arc<dyn EmissionStore>) -> AggregationEngine {
    AggregationEngine::new(store, HumanFactorPolicy::default())
}

#[test]
fn single_electricity_reading_end_to_end() {
    let store = sqlite();
    store
        .insert_activity(&ActivityRecord::new(d(2025, 1, 15), "electricity", 120_000.0, "kWh"))
        .unwrap();

    let range = DateRange::parse("2025-01-01", "2025-01-31").unwrap();
    let report = engine(store).compute_emissions_report(&range).unwrap();

    assert!((report.kpis.total_emissions - 84.96).abs() < 1e-9);
    assert_eq!(report.kpis.biggest_source, "electricity");
    assert_eq!(report.kpis.energy_saved, 120_000.0);

    let payload = serde_json::to_value(ReportPayload::from(&report)).unwrap();
    assert_eq!(
        payload["daily_trend"],
        json!([{ "date": "2025-01-15", "emissions": 84.96 }])
    );
    assert_eq!(
        payload["source_breakdown"],
        json!([{ "source": "electricity", "emissions": 84.96, "percentage": 100.0 }])
    );
    assert_eq!(payload["weekly_trend"], json!([{ "label": "2025-W03", "emissions": 84.96 }]));
    assert_eq!(payload["monthly_trend"], json!([{ "month": "2025-01", "emissions": 84.96 }]));
    assert_eq!(payload["yearly_trend"], json!([{ "year": 2025, "emissions": 84.96 }]));
}

#[test]
fn empty_window_is_zeroed_not_an_error() {
    let report = engine(sqlite())
        .compute_emissions_report(&DateRange::new(d(2030, 1, 1), d(2030, 12, 31)))
        .unwrap();

    assert_eq!(report.kpis.total_emissions, 0.0);
    assert_eq!(report.kpis.percent_change, 0.0);
    assert_eq!(report.kpis.biggest_source, "N/A");
    assert_eq!(report.kpis.biggest_source_percent, 0.0);
    assert!(report.activity.trends.is_empty());
    assert!(report.activity.breakdown.is_empty());
    assert_eq!(report.human.avg_total_count(), 0);
    assert!(report.human.population.is_empty());
}

#[test]
fn unknown_sources_are_excluded() {
    let store = Arc::new(
        FakeStore::new()
            .with_factor("electricity", 1.0)
            .with_activity(d(2025, 1, 2), "electricity", 1000.0)
            .with_activity(d(2025, 1, 3), "solar_credit", 5000.0),
    );
    let report = engine(store)
        .compute_emissions_report(&DateRange::new(d(2025, 1, 1), d(2025, 1, 31)))
        .unwrap();
    assert_eq!(report.activity.row_count, 1);
    assert_eq!(report.kpis.total_emissions, 1.0);
}

#[test]
fn percent_change_against_previous_window() {
    let store = Arc::new(
        FakeStore::new()
            .with_factor("electricity", 1.0)
            .with_activity(d(2025, 1, 15), "electricity", 10_000.0)
            .with_activity(d(2025, 2, 10), "electricity", 15_000.0),
    );
    let range = DateRange::new(d(2025, 2, 1), d(2025, 2, 28));
    let report = engine(store).compute_emissions_report(&range).unwrap();

    assert_eq!(report.previous_range, DateRange::new(d(2025, 1, 5), d(2025, 1, 31)));
    assert_eq!(report.previous_total, 10.0);
    assert!((report.kpis.percent_change - 50.0).abs() < 1e-9);
}

#[test]
fn zero_baseline_reports_zero_change() {
    assert_eq!(percent_change(42.0, 0.0), 0.0);
    assert_eq!(percent_change(0.0, 0.0), 0.0);
    assert_eq!(percent_change(5.0, 10.0), -50.0);
}

#[test]
fn equal_totals_keep_first_seen_source() {
    let store = Arc::new(
        FakeStore::new()
            .with_factor("bus_diesel", 1.0)
            .with_factor("canteen_lpg", 1.0)
            .with_activity(d(2025, 1, 2), "canteen_lpg", 500.0)
            .with_activity(d(2025, 1, 3), "bus_diesel", 500.0),
    );
    let report = engine(store)
        .compute_emissions_report(&DateRange::new(d(2025, 1, 1), d(2025, 1, 31)))
        .unwrap();
    assert_eq!(report.kpis.biggest_source, "canteen_lpg");
    assert_eq!(report.kpis.biggest_source_percent, 50.0);
}

#[test]
fn second_query_failure_fails_the_whole_report() {
    let store = Arc::new(
        FakeStore::failing_on_read(2)
            .with_factor("electricity", 1.0)
            .with_activity(d(2025, 1, 2), "electricity", 1000.0),
    );
    let err = engine(store.clone())
        .compute_emissions_report(&DateRange::new(d(2025, 1, 1), d(2025, 1, 31)))
        .unwrap_err();

    assert!(matches!(err, CarbonError::Storage(StorageError::Unavailable { .. })));
    assert_eq!(err.error_code(), "STORE_UNAVAILABLE");
    assert_eq!(store.reads(), 2);
}

#[test]
fn unparseable_bounds_are_invalid_date_range() {
    let err = engine(sqlite())
        .compute_emissions_report_from_strings(
            Some("2025-13-01"),
            Some("2025-01-31"),
            d(2025, 6, 1),
            180,
        )
        .unwrap_err();
    assert!(matches!(err, CarbonError::Input(InputError::InvalidDateRange { .. })));
    assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
}

#[test]
fn window_at_the_calendar_edge_is_rejected_before_any_read() {
    let store = Arc::new(FakeStore::new());
    let err = engine(store.clone())
        .compute_emissions_report_from_strings(
            Some("-262143-01-01"),
            Some("+262142-12-31"),
            d(2025, 6, 1),
            180,
        )
        .unwrap_err();
    assert!(matches!(err, CarbonError::Input(InputError::InvalidDateRange { .. })));
    assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
    assert_eq!(store.reads(), 0);
}

#[test]
fn missing_bound_uses_trailing_window() {
    let today = d(2025, 6, 30);
    let range = resolve_range(Some("2025-01-01"), None, today, 180).unwrap();
    assert_eq!(range, DateRange::new(d(2025, 1, 1), today));
    assert_eq!(range.start(), d(2025, 1, 1));

    let reversed = resolve_range(Some("2025-03-01"), Some("2025-02-01"), today, 180).unwrap();
    assert_eq!(reversed.start(), d(2025, 2, 1));
    assert_eq!(reversed.end(), d(2025, 3, 1));
}

#[test]
fn human_aggregate_truncates_averages() {
    let store = sqlite();
    store
        .upsert_human(&HumanPopulationRecord::new(d(2025, 3, 1), 3000, 400))
        .unwrap();
    store
        .upsert_human(&HumanPopulationRecord::new(d(2025, 3, 2), 3001, 401))
        .unwrap();

    let report = engine(store)
        .compute_emissions_report(&DateRange::new(d(2025, 3, 1), d(2025, 3, 31)))
        .unwrap();
    let human = &report.human;
    assert_eq!(human.avg_student_count, 3000);
    assert_eq!(human.avg_staff_count, 400);
    assert_eq!(human.avg_total_count(), 3400);
    assert!((human.total_emissions - 6.802).abs() < 1e-9);
    assert_eq!(human.trends.daily.len(), 2);
    assert_eq!(human.population[0].total_count, 3400);
}

#[test]
fn human_factor_can_come_from_the_factor_table() {
    let store = sqlite();
    store
        .upsert_factor(&EmissionFactor::new("human_daily", 2.0, "kg_co2e_per_person_per_day"))
        .unwrap();
    store
        .upsert_human(&HumanPopulationRecord::new(d(2025, 3, 1), 3000, 400))
        .unwrap();
    let range = DateRange::new(d(2025, 3, 1), d(2025, 3, 1));

    let constant = engine(store.clone()).compute_emissions_report(&range).unwrap();
    assert!((constant.human.total_emissions - 3.4).abs() < 1e-12);

    let from_table =
        AggregationEngine::new(store, HumanFactorPolicy::FromFactorTable { fallback: 1.0 })
            .compute_emissions_report(&range)
            .unwrap();
    assert_eq!(from_table.human_factor_kg, 2.0);
    assert!((from_table.human.total_emissions - 6.8).abs() < 1e-12);
}

#[test]
fn missing_human_factor_row_falls_back() {
    let store = Arc::new(FakeStore::new());
    store
        .upsert_human(&HumanPopulationRecord::new(d(2025, 3, 1), 3000, 400))
        .unwrap();
    let engine =
        AggregationEngine::new(store, HumanFactorPolicy::FromFactorTable { fallback: 1.0 });
    let stats = engine.cumulative_human_stats().unwrap();
    assert_eq!(stats.record_count, 1);
    assert_eq!(stats.average_population(), 3400);
    assert!((stats.total_emissions - 3.4).abs() < 1e-12);
}

const SOURCES: [&str; 4] = ["electricity", "bus_diesel", "canteen_lpg", "waste_landfill"];

fn rows_strategy() -> impl Strategy<Value = Vec<ActivityEmission>> {
    prop::collection::vec((0i64..800, 0usize..4, 0.0f64..1_000_000.0), 1..60).prop_map(|items| {
        items
            .into_iter()
            .map(|(offset, src, raw)| {
                let date = d(2024, 1, 1) + chrono::Duration::days(offset);
                let record = ActivityRecord::new(date, SOURCES[src], raw, "unit");
                ActivityEmission::from_record(record, 0.708)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn buckets_and_breakdown_sum_to_total(rows in rows_strategy()) {
        let agg = aggregate_activity(&rows);
        let total = agg.total_emissions;
        let tol = 1e-6 * total.max(1.0);

        let daily: f64 = agg.trends.daily.values().sum();
        let weekly: f64 = agg.trends.weekly.values().sum();
        let monthly: f64 = agg.trends.monthly.values().sum();
        let yearly: f64 = agg.trends.yearly.values().sum();
        let breakdown: f64 = agg.breakdown.iter().map(|s| s.emissions).sum();

        prop_assert!((daily - total).abs() <= tol);
        prop_assert!((weekly - total).abs() <= tol);
        prop_assert!((monthly - total).abs() <= tol);
        prop_assert!((yearly - total).abs() <= tol);
        prop_assert!((breakdown - total).abs() <= tol);
        prop_assert!(agg.breakdown.windows(2).all(|w| w[0].emissions >= w[1].emissions));
        let days: Vec<_> = agg.trends.daily.keys().collect();
        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
    }
}
