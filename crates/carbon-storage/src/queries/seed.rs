//! Demo dataset: monthly readings for every source, Jan-Jun 2025,
//! plus Jan-Jun 2024 electricity for year-over-year views.

use carbon_core::constants::{
    SOURCE_BUS_DIESEL, SOURCE_CANTEEN_LPG, SOURCE_ELECTRICITY, SOURCE_WASTE_LANDFILL,
};
use carbon_core::errors::StorageError;
use carbon_core::models::ActivityRecord;
use chrono::NaiveDate;
use rusqlite::Connection;

use super::activity;

const SAMPLE: &[(i32, u32, &str, f64, &str)] = &[
    (2025, 1, SOURCE_ELECTRICITY, 120_000.0, "kWh"),
    (2025, 2, SOURCE_ELECTRICITY, 115_000.0, "kWh"),
    (2025, 3, SOURCE_ELECTRICITY, 118_000.0, "kWh"),
    (2025, 4, SOURCE_ELECTRICITY, 122_000.0, "kWh"),
    (2025, 5, SOURCE_ELECTRICITY, 125_000.0, "kWh"),
    (2025, 6, SOURCE_ELECTRICITY, 130_000.0, "kWh"),
    (2025, 1, SOURCE_BUS_DIESEL, 5_000.0, "Liters"),
    (2025, 2, SOURCE_BUS_DIESEL, 4_800.0, "Liters"),
    (2025, 3, SOURCE_BUS_DIESEL, 5_200.0, "Liters"),
    (2025, 4, SOURCE_BUS_DIESEL, 5_100.0, "Liters"),
    (2025, 5, SOURCE_BUS_DIESEL, 5_300.0, "Liters"),
    (2025, 6, SOURCE_BUS_DIESEL, 5_500.0, "Liters"),
    (2025, 1, SOURCE_CANTEEN_LPG, 800.0, "kg"),
    (2025, 2, SOURCE_CANTEEN_LPG, 750.0, "kg"),
    (2025, 3, SOURCE_CANTEEN_LPG, 820.0, "kg"),
    (2025, 4, SOURCE_CANTEEN_LPG, 810.0, "kg"),
    (2025, 5, SOURCE_CANTEEN_LPG, 830.0, "kg"),
    (2025, 6, SOURCE_CANTEEN_LPG, 850.0, "kg"),
    (2025, 1, SOURCE_WASTE_LANDFILL, 2_000.0, "kg"),
    (2025, 2, SOURCE_WASTE_LANDFILL, 1_900.0, "kg"),
    (2025, 3, SOURCE_WASTE_LANDFILL, 2_100.0, "kg"),
    (2025, 4, SOURCE_WASTE_LANDFILL, 2_050.0, "kg"),
    (2025, 5, SOURCE_WASTE_LANDFILL, 2_200.0, "kg"),
    (2025, 6, SOURCE_WASTE_LANDFILL, 2_300.0, "kg"),
    (2024, 1, SOURCE_ELECTRICITY, 110_000.0, "kWh"),
    (2024, 2, SOURCE_ELECTRICITY, 108_000.0, "kWh"),
    (2024, 3, SOURCE_ELECTRICITY, 112_000.0, "kWh"),
    (2024, 4, SOURCE_ELECTRICITY, 115_000.0, "kWh"),
    (2024, 5, SOURCE_ELECTRICITY, 118_000.0, "kWh"),
    (2024, 6, SOURCE_ELECTRICITY, 120_000.0, "kWh"),
];

/// The demo readings, all dated the 15th of their month.
pub fn sample_records() -> Vec<ActivityRecord> {
    SAMPLE
        .iter()
        .filter_map(|&(year, month, source, value, unit)| {
            NaiveDate::from_ymd_opt(year, month, 15)
                .map(|date| ActivityRecord::new(date, source, value, unit))
        })
        .collect()
}

/// Load the demo readings if `activity_data` is empty. Returns rows inserted.
pub fn seed_sample_data(conn: &Connection) -> Result<usize, StorageError> {
    if activity::count(conn)? > 0 {
        tracing::info!("activity data present, skipping sample seed");
        return Ok(0);
    }
    let inserted = activity::insert_activity_batch(conn, &sample_records())?;
    tracing::info!(inserted, "seeded sample activity data");
    Ok(inserted)
}
