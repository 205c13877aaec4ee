//! Configuration system for the carbon ledger.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod auth_config;
pub mod carbon_config;
pub mod emissions_config;
pub mod report_config;
pub mod storage_config;

pub use auth_config::AuthConfig;
pub use carbon_config::{CarbonConfig, CliOverrides};
pub use emissions_config::EmissionsConfig;
pub use report_config::ReportConfig;
pub use storage_config::StorageConfig;
