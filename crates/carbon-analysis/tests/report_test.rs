//! Dashboard payload shape and serialization rounding.

mod common;

use carbon_analysis::{HumanFactorPolicy, ReportingFacade};
use carbon_core::models::{ActivityRecord, DateRange, HumanPopulationRecord};
use carbon_core::traits::EmissionStore;
use common::{d, sqlite};

fn facade_with_data() -> ReportingFacade {
    let store = sqlite();
    store
        .insert_activity_batch(&[
            ActivityRecord::new(d(2025, 1, 15), "electricity", 120_000.0, "kWh"),
            ActivityRecord::new(d(2025, 1, 20), "bus_diesel", 1234.5678, "Liters"),
            ActivityRecord::new(d(2024, 12, 20), "electricity", 60_000.0, "kWh"),
        ])
        .unwrap();
    store
        .upsert_human(&HumanPopulationRecord::new(d(2025, 1, 10), 2999, 401))
        .unwrap();
    store
        .upsert_human(&HumanPopulationRecord::new(d(2025, 1, 11), 1234, 1))
        .unwrap();
    ReportingFacade::new(store, HumanFactorPolicy::default())
}

#[test]
fn dashboard_has_every_section() {
    let payload = facade_with_data()
        .dashboard(&DateRange::new(d(2025, 1, 1), d(2025, 1, 31)))
        .unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    for key in [
        "window",
        "kpis",
        "daily_trend",
        "weekly_trend",
        "monthly_trend",
        "yearly_trend",
        "source_breakdown",
        "human_emissions",
        "cumulative_human",
        "recommendations",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    for key in [
        "total_emissions",
        "percent_change",
        "biggest_source",
        "biggest_source_percent",
        "energy_saved",
    ] {
        assert!(json["kpis"].get(key).is_some(), "missing kpis.{key}");
    }
    for key in [
        "total_emissions",
        "avg_student_count",
        "avg_staff_count",
        "avg_total_count",
        "daily_trend",
        "weekly_trend",
        "monthly_trend",
        "population_data",
    ] {
        assert!(json["human_emissions"].get(key).is_some(), "missing human_emissions.{key}");
    }

    assert_eq!(json["window"]["start"], "2025-01-01");
    assert_eq!(json["window"]["previous_start"], "2024-12-02");
    assert_eq!(json["window"]["previous_end"], "2024-12-31");
}

#[test]
fn figures_are_rounded_only_when_serialized() {
    let facade = facade_with_data();
    let range = DateRange::new(d(2025, 1, 1), d(2025, 1, 31));
    let report = facade.aggregation().compute_emissions_report(&range).unwrap();

    // 84.96 + 1234.5678 * 2.68 / 1000 = 88.26856...
    let expected = 84.96 + 1234.5678 * 2.68 / 1000.0;
    assert!((report.kpis.total_emissions - expected).abs() < 1e-9);

    let json = serde_json::to_value(facade.dashboard(&range).unwrap()).unwrap();
    assert_eq!(json["kpis"]["total_emissions"], 88.27);
    assert_eq!(json["kpis"]["energy_saved"], 120_000.0);
    // Previous window held 42.48 t, so +107.7887%.
    assert!((report.kpis.percent_change - 107.788_704_576).abs() < 1e-6);
    assert_eq!(json["kpis"]["percent_change"], 107.79);
    assert_eq!(json["kpis"]["biggest_source_percent"], 96.3);
    assert_eq!(json["source_breakdown"][1]["emissions"], 3.31);

    let population = &json["human_emissions"]["population_data"];
    assert_eq!(population[0]["total"], 3400);
    assert_eq!(population[0]["emissions"], 3.4);
    assert_eq!(population[1]["emissions"], 1.235);
    assert_eq!(json["human_emissions"]["avg_total_count"], 2317);
}

#[test]
fn cumulative_section_ignores_the_window() {
    let payload = facade_with_data()
        .dashboard(&DateRange::new(d(2030, 1, 1), d(2030, 1, 2)))
        .unwrap();
    assert_eq!(payload.report.kpis.total_emissions, 0.0);
    assert_eq!(payload.cumulative_human.total_records, 2);
    assert_eq!(payload.cumulative_human.average_population, 2317);
    assert_eq!(
        payload.recommendations.recommendations[0].title,
        "Focus on Energy Efficiency"
    );
}
