//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, 16MB page cache, 5s busy_timeout, temp_store MEMORY.

use carbon_core::errors::StorageError;
use rusqlite::Connection;

use crate::queries::util::sqlite_error;

/// Apply performance and safety pragmas to a read-write connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = -16000;
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| sqlite_error("apply pragmas", e))
}

/// Apply read-only pragmas to a pooled read connection.
pub fn apply_read_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA query_only = ON;
        PRAGMA cache_size = -16000;
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| sqlite_error("apply read pragmas", e))
}

/// Verify that WAL mode is active.
pub fn verify_wal_mode(conn: &Connection) -> Result<bool, StorageError> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| sqlite_error("read journal_mode", e))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
