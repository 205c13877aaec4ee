//! Queries for the emission_factors table.

use carbon_core::errors::StorageError;
use carbon_core::models::EmissionFactor;
use rusqlite::{params, Connection, OptionalExtension};

use super::util::sqlite_error;

/// Insert or replace the factor for a source type.
pub fn upsert_factor(conn: &Connection, factor: &EmissionFactor) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO emission_factors (source_type, factor, factor_unit) VALUES (?1, ?2, ?3)
         ON CONFLICT(source_type) DO UPDATE SET
            factor = excluded.factor,
            factor_unit = excluded.factor_unit",
        params![factor.source_type, factor.factor, factor.factor_unit],
    )
    .map_err(|e| sqlite_error("upsert emission factor", e))?;
    Ok(())
}

pub fn get_factor(
    conn: &Connection,
    source_type: &str,
) -> Result<Option<EmissionFactor>, StorageError> {
    conn.query_row(
        "SELECT source_type, factor, factor_unit FROM emission_factors WHERE source_type = ?1",
        params![source_type],
        |row| {
            Ok(EmissionFactor {
                source_type: row.get(0)?,
                factor: row.get(1)?,
                factor_unit: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| sqlite_error("get emission factor", e))
}

pub fn list_factors(conn: &Connection) -> Result<Vec<EmissionFactor>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT source_type, factor, factor_unit FROM emission_factors ORDER BY source_type",
        )
        .map_err(|e| sqlite_error("prepare list factors", e))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(EmissionFactor {
                source_type: row.get(0)?,
                factor: row.get(1)?,
                factor_unit: row.get(2)?,
            })
        })
        .map_err(|e| sqlite_error("list factors", e))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| sqlite_error("read factor row", e))
}
