//! Storage-layer errors for SQLite operations.

use super::error_code::{self, CarbonErrorCode};

/// Errors raised by the store client.
///
/// `Unavailable` means the store could not be reached at all (cannot open,
/// busy, locked, poisoned connection). It is reported, never retried.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },
}

impl StorageError {
    /// True when the failure is a connectivity failure rather than a query failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl CarbonErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sqlite { .. } => error_code::STORAGE_ERROR,
            Self::Unavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
        }
    }
}
