//! CarbonErrorCode trait for caller-facing error codes.

/// Every error enum implements this to expose a stable code string
/// alongside its human-readable message.
pub trait CarbonErrorCode {
    /// Returns the error code string (e.g., "STORE_UNAVAILABLE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const INVALID_DATE_RANGE: &str = "INVALID_DATE_RANGE";
pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
