//! End-to-end command runs against a temporary database.

use carbon_cli::{run, Cli, CliError};
use carbon_core::errors::CarbonErrorCode;
use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("carbon.toml"),
            "[auth]\nsecret = \"cli-test-secret\"\n",
        )
        .unwrap();
        Self { dir }
    }

    fn run(&self, args: &[&str]) -> Result<Value, CliError> {
        let db = self.dir.path().join("carbon.db");
        let mut argv = vec![
            "carbon".to_string(),
            "--db".to_string(),
            db.display().to_string(),
            "--config-dir".to_string(),
            self.dir.path().display().to_string(),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));
        run(Cli::try_parse_from(argv).unwrap())
    }

    fn token(&self) -> String {
        let issued = self.run(&["token", "issue", "--user", "7"]).unwrap();
        issued["token"].as_str().unwrap().to_string()
    }
}

#[test]
fn init_seeds_once() {
    let ws = Workspace::new();
    let first = ws.run(&["init", "--sample-data"]).unwrap();
    assert_eq!(first["schema_version"], 2);
    assert_eq!(first["seeded_rows"], 30);

    let second = ws.run(&["init", "--sample-data"]).unwrap();
    assert_eq!(second["seeded_rows"], 0);
}

#[test]
fn factor_list_shows_defaults() {
    let ws = Workspace::new();
    let factors = ws.run(&["factor", "list"]).unwrap();
    assert_eq!(factors.as_array().unwrap().len(), 5);
}

#[test]
fn mutations_require_a_token() {
    let ws = Workspace::new();
    let err = ws
        .run(&[
            "population",
            "record",
            "--date",
            "2025-03-01",
            "--students",
            "3000",
            "--staff",
            "400",
        ])
        .unwrap_err();
    assert_eq!(err.error_code(), "UNAUTHENTICATED");

    let token = ws.token();
    let recorded = ws
        .run(&[
            "--token", &token, "population", "record", "--date", "2025-03-01", "--students", "3000",
            "--staff", "400",
        ])
        .unwrap();
    assert_eq!(recorded["data"]["this_day_emissions_tonnes"], 3.4);
    assert_eq!(recorded["cumulative_stats"]["average_population"], 3400);
}

#[test]
fn activity_then_report() {
    let ws = Workspace::new();
    let token = ws.token();
    ws.run(&[
        "--token", &token, "activity", "add", "--date", "2025-01-15", "--source", "electricity",
        "--value", "120000", "--unit", "kWh",
    ])
    .unwrap();

    let report = ws
        .run(&["report", "--start", "2025-01-01", "--end", "2025-01-31"])
        .unwrap();
    assert_eq!(report["kpis"]["total_emissions"], 84.96);
    assert_eq!(report["kpis"]["biggest_source"], "electricity");
    assert_eq!(report["source_breakdown"][0]["percentage"], 100.0);

    let recs = ws.run(&["recommendations"]).unwrap();
    assert_eq!(recs["recommendations"][0]["title"], "Focus on Energy Efficiency");
}

#[test]
fn import_is_all_or_nothing() {
    let ws = Workspace::new();
    let token = ws.token();
    let file = ws.dir.path().join("records.json");
    std::fs::write(
        &file,
        r#"{"records": [
            {"date": "2025-01-15", "source_type": "electricity", "raw_value": 100, "unit": "kWh"},
            {"date": "2025-01-16", "source_type": "bus_diesel", "raw_value": "oops", "unit": "Liters"}
        ]}"#,
    )
    .unwrap();
    let file_arg = file.display().to_string();

    let err = ws
        .run(&["--token", &token, "activity", "import", "--file", &file_arg])
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(err.to_string().contains("row 2"));

    std::fs::write(
        &file,
        r#"[{"date": "2025-01-15", "source_type": "electricity", "raw_value": 100, "unit": "kWh"}]"#,
    )
    .unwrap();
    let ok = ws
        .run(&["--token", &token, "activity", "import", "--file", &file_arg])
        .unwrap();
    assert_eq!(ok["message"], "1 records inserted.");
}

#[test]
fn bad_report_dates_are_rejected() {
    let ws = Workspace::new();
    let err = ws
        .run(&["report", "--start", "yesterday", "--end", "2025-01-31"])
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
}
