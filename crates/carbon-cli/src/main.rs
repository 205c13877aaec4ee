//! carbon CLI: campus emissions ledger.

use std::process::ExitCode;

use carbon_cli::{run, Cli};
use carbon_core::errors::CarbonErrorCode;
use carbon_core::tracing::init_tracing;
use clap::Parser;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).and_then(|output| carbon_cli::output::to_pretty_json(&output)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
