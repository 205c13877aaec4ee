use std::path::Path;

use carbon_analysis::population::ActivityInput;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::{ActivityAction, CliError};

/// Accepted import file shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Records { records: Vec<ActivityInput> },
    List(Vec<ActivityInput>),
}

pub fn run(ctx: &AppContext, action: ActivityAction) -> Result<Value, CliError> {
    let service = ctx.service();
    match action {
        ActivityAction::Add {
            date,
            source,
            value,
            unit,
        } => {
            let input = ActivityInput::new(&date, &source, value, &unit);
            let id = service.record_activity(&ctx.request(), &input)?;
            Ok(json!({ "success": true, "id": id }))
        }
        ActivityAction::Import { file } => {
            let records = read_import(&file)?;
            let inserted = service.record_activity_batch(&ctx.request(), &records)?;
            Ok(json!({
                "success": true,
                "message": format!("{inserted} records inserted."),
            }))
        }
    }
}

fn read_import(path: &Path) -> Result<Vec<ActivityInput>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(match serde_json::from_str(&content)? {
        ImportFile::Records { records } => records,
        ImportFile::List(records) => records,
    })
}
