//! CLI-level errors.

use carbon_core::errors::{AuthError, CarbonError, CarbonErrorCode, ConfigError, StorageError};

pub const IO_ERROR: &str = "IO_ERROR";
pub const INVALID_JSON: &str = "INVALID_JSON";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Carbon(#[from] CarbonError),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::Carbon(e.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Carbon(e.into())
    }
}

impl From<AuthError> for CliError {
    fn from(e: AuthError) -> Self {
        Self::Carbon(e.into())
    }
}

impl CarbonErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Carbon(e) => e.error_code(),
            Self::Io { .. } => IO_ERROR,
            Self::Json(_) => INVALID_JSON,
        }
    }
}
