use carbon_core::constants::VERSION;
use carbon_storage::migrations;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::CliError;

/// The store is migrated on open; this reports the result and optionally seeds.
pub fn run(ctx: &AppContext, sample_data: bool) -> Result<Value, CliError> {
    let schema_version = ctx
        .store
        .database()
        .with_writer(migrations::current_version)?;

    let seeded_rows = if sample_data {
        ctx.store.seed_sample_data()?
    } else {
        0
    };
    tracing::info!(schema_version, seeded_rows, "database initialized");

    Ok(json!({
        "version": VERSION,
        "db_path": ctx.db_path().display().to_string(),
        "schema_version": schema_version,
        "seeded_rows": seeded_rows,
    }))
}
