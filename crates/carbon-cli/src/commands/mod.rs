//! One module per top-level command.

pub mod activity;
pub mod factor;
pub mod init;
pub mod population;
pub mod report;
pub mod token;

use serde_json::Value;

use crate::context::AppContext;
use crate::{CliError, Commands};

pub fn dispatch(ctx: &AppContext, command: Commands) -> Result<Value, CliError> {
    match command {
        Commands::Init { sample_data } => init::run(ctx, sample_data),
        Commands::Factor { action } => factor::run(ctx, action),
        Commands::Activity { action } => activity::run(ctx, action),
        Commands::Population { action } => population::run(ctx, action),
        Commands::Report { start, end } => report::dashboard(ctx, start.as_deref(), end.as_deref()),
        Commands::Recommendations => report::recommendations(ctx),
        Commands::Token { action } => token::run(ctx, action),
    }
}
