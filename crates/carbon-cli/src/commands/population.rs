use carbon_analysis::population::PopulationInput;
use serde_json::Value;

use crate::context::AppContext;
use crate::output::to_value;
use crate::{CliError, PopulationAction};

pub fn run(ctx: &AppContext, action: PopulationAction) -> Result<Value, CliError> {
    match action {
        PopulationAction::Record {
            date,
            students,
            staff,
        } => {
            let input = PopulationInput::new(&date, students, staff);
            let recorded = ctx.service().record_population(&ctx.request(), &input)?;
            to_value(&recorded)
        }
    }
}
