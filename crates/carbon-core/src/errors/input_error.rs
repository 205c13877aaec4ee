//! Caller input errors. These never change state.

use super::error_code::{self, CarbonErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid date for {field}: \"{value}\" (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    #[error("{field} must be non-negative, got {value}")]
    NegativeCount { field: String, value: i64 },

    #[error("{field} must be a valid integer, got {value}")]
    NotAnInteger { field: String, value: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Invalid record at row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<InputError>,
    },
}

impl InputError {
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl CarbonErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => error_code::INVALID_DATE_RANGE,
            _ => error_code::INVALID_INPUT,
        }
    }
}
