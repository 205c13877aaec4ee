//! Top-level error aggregating every subsystem error.

use super::error_code::CarbonErrorCode;
use super::{AuthError, ConfigError, InputError, StorageError};

/// Errors surfaced by the report, recommendation, and mutation entry points.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CarbonError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type CarbonResult<T> = Result<T, CarbonError>;

impl CarbonErrorCode for CarbonError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Auth(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
