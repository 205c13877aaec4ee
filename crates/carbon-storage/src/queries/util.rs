//! rusqlite error classification.

use carbon_core::errors::StorageError;
use rusqlite::ErrorCode;

/// Map a rusqlite error to a `StorageError`, tagging it with `context`.
///
/// Open, busy, lock, and not-a-database failures mean the store cannot be
/// reached and map to `Unavailable`; everything else is a query failure.
pub fn sqlite_error(context: &str, e: rusqlite::Error) -> StorageError {
    let unreachable = matches!(
        e.sqlite_error_code(),
        Some(
            ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure
        )
    );
    let message = format!("{context}: {e}");
    if unreachable {
        tracing::error!(%message, "store unavailable");
        StorageError::Unavailable { message }
    } else {
        StorageError::Sqlite { message }
    }
}
