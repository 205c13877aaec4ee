//! Queries for the activity_data table.

use carbon_core::errors::StorageError;
use carbon_core::models::{ActivityEmission, ActivityRecord, DateRange, SourceTotal};
use rusqlite::{params, Connection};

use super::util::sqlite_error;
use crate::connection::writer::with_immediate_transaction;

const INSERT_SQL: &str =
    "INSERT INTO activity_data (date, source_type, raw_value, unit) VALUES (?1, ?2, ?3, ?4)";

/// Insert one reading. Returns the row id.
pub fn insert_activity(conn: &Connection, record: &ActivityRecord) -> Result<i64, StorageError> {
    conn.execute(
        INSERT_SQL,
        params![record.date, record.source_type, record.raw_value, record.unit],
    )
    .map_err(|e| sqlite_error("insert activity", e))?;
    Ok(conn.last_insert_rowid())
}

/// Insert every reading in one transaction; any failure inserts none.
pub fn insert_activity_batch(
    conn: &Connection,
    records: &[ActivityRecord],
) -> Result<usize, StorageError> {
    with_immediate_transaction(conn, |tx| {
        let mut stmt = tx
            .prepare_cached(INSERT_SQL)
            .map_err(|e| sqlite_error("prepare activity insert", e))?;
        for record in records {
            stmt.execute(params![
                record.date,
                record.source_type,
                record.raw_value,
                record.unit
            ])
            .map_err(|e| sqlite_error("insert activity", e))?;
        }
        Ok(records.len())
    })
}

/// Readings in `range` inner-joined to their factors, ordered by date then insertion.
/// Readings whose source has no factor are excluded.
pub fn query_emissions_in_range(
    conn: &Connection,
    range: &DateRange,
) -> Result<Vec<ActivityEmission>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT a.date, a.source_type, a.raw_value, a.unit, e.factor
             FROM activity_data a
             JOIN emission_factors e ON a.source_type = e.source_type
             WHERE a.date BETWEEN ?1 AND ?2
             ORDER BY a.date, a.id",
        )
        .map_err(|e| sqlite_error("prepare activity query", e))?;

    let rows = stmt
        .query_map(params![range.start(), range.end()], |row| {
            let record = ActivityRecord {
                date: row.get(0)?,
                source_type: row.get(1)?,
                raw_value: row.get(2)?,
                unit: row.get(3)?,
            };
            let factor: f64 = row.get(4)?;
            Ok(ActivityEmission::from_record(record, factor))
        })
        .map_err(|e| sqlite_error("query activity", e))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| sqlite_error("read activity row", e))
}

/// All-time emissions per source, largest first. Equal totals order by source name.
pub fn query_source_totals(conn: &Connection) -> Result<Vec<SourceTotal>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT a.source_type, SUM(a.raw_value * e.factor / 1000.0) AS total_emissions
             FROM activity_data a
             JOIN emission_factors e ON a.source_type = e.source_type
             GROUP BY a.source_type
             ORDER BY total_emissions DESC, a.source_type ASC",
        )
        .map_err(|e| sqlite_error("prepare source totals", e))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(SourceTotal {
                source_type: row.get(0)?,
                total_emissions: row.get(1)?,
            })
        })
        .map_err(|e| sqlite_error("query source totals", e))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| sqlite_error("read source total row", e))
}

pub fn count(conn: &Connection) -> Result<u64, StorageError> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM activity_data", [], |row| row.get(0))
        .map_err(|e| sqlite_error("count activity", e))?;
    Ok(n.max(0) as u64)
}
