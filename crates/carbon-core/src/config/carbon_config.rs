//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AuthConfig, EmissionsConfig, ReportConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CARBON_*`)
/// 3. Project config (`carbon.toml` in the project root)
/// 4. User config (`~/.carbon/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CarbonConfig {
    pub storage: StorageConfig,
    pub report: ReportConfig,
    pub emissions: EmissionsConfig,
    pub auth: AuthConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<String>,
    pub default_window_days: Option<u32>,
    pub human_factor_from_table: Option<bool>,
}

impl CarbonConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("carbon.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CarbonConfig) -> Result<(), ConfigError> {
        if config.report.default_window_days == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.default_window_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(kg) = config.emissions.human_factor_kg {
            if !kg.is_finite() || kg < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "emissions.human_factor_kg".to_string(),
                    message: "must be a finite non-negative number".to_string(),
                });
            }
        }
        if config.auth.token_ttl_hours == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "auth.token_ttl_hours".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.storage.read_pool_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".carbon").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut CarbonConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CarbonConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut CarbonConfig, other: &CarbonConfig) {
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }

        if other.report.default_window_days.is_some() {
            base.report.default_window_days = other.report.default_window_days;
        }

        if other.emissions.human_factor_kg.is_some() {
            base.emissions.human_factor_kg = other.emissions.human_factor_kg;
        }
        if other.emissions.human_factor_from_table.is_some() {
            base.emissions.human_factor_from_table = other.emissions.human_factor_from_table;
        }

        if other.auth.secret.is_some() {
            base.auth.secret = other.auth.secret.clone();
        }
        if other.auth.token_ttl_hours.is_some() {
            base.auth.token_ttl_hours = other.auth.token_ttl_hours;
        }
    }

    /// Pattern: `CARBON_DB_PATH`, `CARBON_DEFAULT_WINDOW_DAYS`, etc.
    /// Unparseable values are skipped.
    fn apply_env_overrides(config: &mut CarbonConfig) {
        if let Ok(val) = std::env::var("CARBON_DB_PATH") {
            config.storage.db_path = Some(val);
        }
        if let Ok(val) = std::env::var("CARBON_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CARBON_DEFAULT_WINDOW_DAYS") {
            if let Ok(v) = val.parse::<u32>() {
                config.report.default_window_days = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CARBON_HUMAN_FACTOR_KG") {
            if let Ok(v) = val.parse::<f64>() {
                config.emissions.human_factor_kg = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CARBON_HUMAN_FACTOR_FROM_TABLE") {
            if let Ok(v) = val.parse::<bool>() {
                config.emissions.human_factor_from_table = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CARBON_AUTH_SECRET") {
            config.auth.secret = Some(val);
        }
        if let Ok(val) = std::env::var("CARBON_TOKEN_TTL_HOURS") {
            if let Ok(v) = val.parse::<u32>() {
                config.auth.token_ttl_hours = Some(v);
            }
        }
    }

    fn apply_cli_overrides(config: &mut CarbonConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_path {
            config.storage.db_path = Some(v.clone());
        }
        if let Some(v) = cli.default_window_days {
            config.report.default_window_days = Some(v);
        }
        if let Some(v) = cli.human_factor_from_table {
            config.emissions.human_factor_from_table = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
