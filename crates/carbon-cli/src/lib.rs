//! # carbon-cli
//!
//! Argument definitions and command dispatch for the `carbon` binary.
//! Every command returns a JSON value; `main` prints it.

pub mod commands;
pub mod context;
pub mod error;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

pub use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "carbon", version, about = "Campus carbon emissions ledger")]
pub struct Cli {
    /// SQLite database file. Overrides config and CARBON_DB_PATH.
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Directory holding carbon.toml.
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Read the per-person factor from the human_daily factor row.
    #[arg(long, global = true)]
    pub human_factor_from_table: bool,

    /// Bearer token for commands that change data.
    #[arg(long, global = true, env = carbon_core::constants::TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or migrate the database.
    Init {
        /// Load the demo dataset into an empty activity table.
        #[arg(long)]
        sample_data: bool,
    },

    /// Inspect or change emission factors.
    Factor {
        #[command(subcommand)]
        action: FactorAction,
    },

    /// Record activity readings.
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Record daily head counts.
    Population {
        #[command(subcommand)]
        action: PopulationAction,
    },

    /// Dashboard report for a window. Defaults to the trailing window.
    Report {
        /// Window start, YYYY-MM-DD.
        #[arg(long)]
        start: Option<String>,
        /// Window end, YYYY-MM-DD.
        #[arg(long)]
        end: Option<String>,
    },

    /// Recommendations from all-time totals.
    Recommendations,

    /// Manage bearer tokens.
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum FactorAction {
    /// List all factors.
    List,
    /// Create or replace a factor.
    Set {
        source_type: String,
        factor: f64,
        factor_unit: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ActivityAction {
    /// Add one reading.
    Add {
        #[arg(long)]
        date: String,
        #[arg(long)]
        source: String,
        #[arg(long)]
        value: String,
        #[arg(long)]
        unit: String,
    },
    /// Insert every record in a JSON file, all or nothing.
    Import {
        /// `[{date, source_type, raw_value, unit}, ...]` or `{"records": [...]}`.
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum PopulationAction {
    /// Record (or replace) the counts for a date.
    Record {
        #[arg(long)]
        date: String,
        #[arg(long)]
        students: String,
        #[arg(long)]
        staff: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TokenAction {
    /// Issue a signed token. Requires auth.secret.
    Issue {
        #[arg(long)]
        user: i64,
    },
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<Value, CliError> {
    let ctx = context::AppContext::load(&cli)?;
    commands::dispatch(&ctx, cli.command)
}
