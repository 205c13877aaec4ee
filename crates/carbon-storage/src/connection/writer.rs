//! Write connection utilities: BEGIN IMMEDIATE transactions.

use carbon_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::queries::util::sqlite_error;

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
/// The write lock is taken at transaction start; any error rolls back.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    // The writer is shared behind `&Connection`, so the transaction is opened
    // unchecked. Dropping it without commit rolls back.
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| sqlite_error("begin immediate transaction", e))?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| sqlite_error("commit", e))?;
    Ok(result)
}
