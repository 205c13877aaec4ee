//! Error handling for the carbon ledger.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod auth_error;
pub mod carbon_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod storage_error;

pub use auth_error::AuthError;
pub use carbon_error::{CarbonError, CarbonResult};
pub use config_error::ConfigError;
pub use error_code::CarbonErrorCode;
pub use input_error::InputError;
pub use storage_error::StorageError;
