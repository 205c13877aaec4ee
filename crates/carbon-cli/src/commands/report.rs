use chrono::Local;
use serde_json::Value;

use crate::context::AppContext;
use crate::output::to_value;
use crate::CliError;

pub fn dashboard(
    ctx: &AppContext,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Value, CliError> {
    let today = Local::now().date_naive();
    let payload = ctx.service().dashboard_from_strings(start, end, today)?;
    to_value(&payload)
}

pub fn recommendations(ctx: &AppContext) -> Result<Value, CliError> {
    to_value(&ctx.service().recommendations()?)
}
