//! Tests for layered configuration.

use std::sync::Mutex;

use carbon_core::config::{CarbonConfig, CliOverrides};
use carbon_core::errors::ConfigError;

/// Serializes tests that touch process environment.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn defaults_are_compiled_in() {
    let config = CarbonConfig::default();
    assert_eq!(config.report.effective_default_window_days(), 180);
    assert_eq!(config.emissions.effective_human_factor_kg(), 1.0);
    assert!(!config.emissions.effective_human_factor_from_table());
    assert_eq!(config.auth.effective_token_ttl_hours(), 24);
    assert_eq!(config.storage.effective_read_pool_size(), 4);
    assert_eq!(config.storage.effective_db_path().to_str(), Some("carbon.db"));
}

#[test]
fn from_toml_reads_sections() {
    let config = CarbonConfig::from_toml(
        r#"
        [storage]
        db_path = "/var/lib/carbon/ledger.db"

        [report]
        default_window_days = 90

        [emissions]
        human_factor_from_table = true
        "#,
    )
    .unwrap();
    assert_eq!(config.report.effective_default_window_days(), 90);
    assert!(config.emissions.effective_human_factor_from_table());
    assert_eq!(
        config.storage.effective_db_path().to_str(),
        Some("/var/lib/carbon/ledger.db")
    );
}

#[test]
fn invalid_values_fail_validation() {
    let cases = [
        "[report]\ndefault_window_days = 0",
        "[emissions]\nhuman_factor_kg = -1.0",
        "[auth]\ntoken_ttl_hours = 0",
        "[storage]\nread_pool_size = 0",
    ];
    for toml in cases {
        let err = CarbonConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }), "{toml}");
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = CarbonConfig::from_toml("[report\nbroken").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn missing_secret_is_reported() {
    let config = CarbonConfig::default();
    assert!(matches!(
        config.auth.require_secret(),
        Err(ConfigError::MissingValue { .. })
    ));
}

#[test]
fn secret_is_redacted_in_debug_output() {
    let config = CarbonConfig::from_toml("[auth]\nsecret = \"hunter2\"").unwrap();
    assert!(!format!("{config:?}").contains("hunter2"));
}

#[test]
fn layers_resolve_in_priority_order() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("carbon.toml"),
        "[report]\ndefault_window_days = 30\n[storage]\ndb_path = \"project.db\"\n",
    )
    .unwrap();

    std::env::set_var("CARBON_DEFAULT_WINDOW_DAYS", "60");
    let config = CarbonConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.report.effective_default_window_days(), 60);
    assert_eq!(config.storage.effective_db_path().to_str(), Some("project.db"));

    let cli = CliOverrides {
        default_window_days: Some(7),
        db_path: Some("cli.db".into()),
        ..Default::default()
    };
    let config = CarbonConfig::load(dir.path(), Some(&cli)).unwrap();
    std::env::remove_var("CARBON_DEFAULT_WINDOW_DAYS");

    assert_eq!(config.report.effective_default_window_days(), 7);
    assert_eq!(config.storage.effective_db_path().to_str(), Some("cli.db"));
}

#[test]
fn round_trips_through_toml() {
    let config = CarbonConfig::from_toml("[report]\ndefault_window_days = 45").unwrap();
    let text = config.to_toml().unwrap();
    let again = CarbonConfig::from_toml(&text).unwrap();
    assert_eq!(again.report.default_window_days, Some(45));
}
