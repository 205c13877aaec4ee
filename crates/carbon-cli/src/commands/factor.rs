use carbon_core::models::EmissionFactor;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::output::to_value;
use crate::{CliError, FactorAction};

pub fn run(ctx: &AppContext, action: FactorAction) -> Result<Value, CliError> {
    let service = ctx.service();
    match action {
        FactorAction::List => to_value(&service.list_factors()?),
        FactorAction::Set {
            source_type,
            factor,
            factor_unit,
        } => {
            let factor = EmissionFactor::new(source_type, factor, factor_unit);
            service.set_factor(&ctx.request(), &factor)?;
            Ok(json!({ "success": true, "factor": factor }))
        }
    }
}
