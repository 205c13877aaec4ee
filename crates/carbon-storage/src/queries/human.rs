//! Queries for the human_population table.

use carbon_core::errors::StorageError;
use carbon_core::models::{
    emissions_tonnes, CumulativeHumanStats, DateRange, HumanEmission, HumanPopulationRecord,
};
use rusqlite::{params, Connection, Row};

use super::util::sqlite_error;

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<HumanPopulationRecord> {
    Ok(HumanPopulationRecord {
        date: row.get(0)?,
        student_count: row.get(1)?,
        staff_count: row.get(2)?,
    })
}

/// Upsert the counts for one date (last writer wins). Returns the stored row.
pub fn upsert(
    conn: &Connection,
    record: &HumanPopulationRecord,
) -> Result<HumanPopulationRecord, StorageError> {
    conn.query_row(
        "INSERT INTO human_population (date, student_count, staff_count) VALUES (?1, ?2, ?3)
         ON CONFLICT(date) DO UPDATE SET
            student_count = excluded.student_count,
            staff_count = excluded.staff_count
         RETURNING date, student_count, staff_count",
        params![record.date, record.student_count, record.staff_count],
        record_from_row,
    )
    .map_err(|e| sqlite_error("upsert human population", e))
}

/// Population rows in `range`, ordered by date.
pub fn query_in_range(
    conn: &Connection,
    range: &DateRange,
    kg_per_person_day: f64,
) -> Result<Vec<HumanEmission>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT date, student_count, staff_count FROM human_population
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date",
        )
        .map_err(|e| sqlite_error("prepare human query", e))?;

    let rows = stmt
        .query_map(params![range.start(), range.end()], record_from_row)
        .map_err(|e| sqlite_error("query human population", e))?;

    rows.map(|r| r.map(|record| HumanEmission::from_record(&record, kg_per_person_day)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| sqlite_error("read human row", e))
}

/// Whole-table statistics. Averages are truncated toward zero.
pub fn cumulative(
    conn: &Connection,
    kg_per_person_day: f64,
) -> Result<CumulativeHumanStats, StorageError> {
    let (people, records, sum_students, sum_staff): (i64, i64, i64, i64) = conn
        .query_row(
            "SELECT COALESCE(SUM(total_count), 0), COUNT(*),
                    COALESCE(SUM(student_count), 0), COALESCE(SUM(staff_count), 0)
             FROM human_population",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .map_err(|e| sqlite_error("query human cumulative", e))?;

    if records == 0 {
        return Ok(CumulativeHumanStats::default());
    }
    let records = records as u64;
    Ok(CumulativeHumanStats {
        total_emissions: emissions_tonnes(people as f64, kg_per_person_day),
        record_count: records,
        avg_students: sum_students.max(0) as u64 / records,
        avg_staff: sum_staff.max(0) as u64 / records,
    })
}

pub fn count(conn: &Connection) -> Result<u64, StorageError> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM human_population", [], |row| row.get(0))
        .map_err(|e| sqlite_error("count human population", e))?;
    Ok(n.max(0) as u64)
}
