//! Shared constants for the carbon ledger.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kilograms per metric tonne.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Metabolic CO2e per person per campus day, in kg.
pub const DEFAULT_HUMAN_FACTOR_KG: f64 = 1.0;

/// Default report window when the caller gives no range.
pub const DEFAULT_WINDOW_DAYS: u32 = 180;

/// Default bearer token lifetime.
pub const DEFAULT_TOKEN_TTL_HOURS: u32 = 24;

/// Default read pool size for file-backed stores.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Default database file name, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "carbon.db";

/// Biggest-source label when a window has no activity.
pub const NO_SOURCE: &str = "N/A";

/// Calendar date wire format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---- Source types ----

pub const SOURCE_ELECTRICITY: &str = "electricity";
pub const SOURCE_BUS_DIESEL: &str = "bus_diesel";
pub const SOURCE_CANTEEN_LPG: &str = "canteen_lpg";
pub const SOURCE_WASTE_LANDFILL: &str = "waste_landfill";

/// Factor row reserved for population emissions.
pub const SOURCE_HUMAN_DAILY: &str = "human_daily";

/// Activity source whose raw value feeds the energy KPI (kWh).
pub const ENERGY_KPI_SOURCE: &str = SOURCE_ELECTRICITY;

/// Default factor table: (source_type, kg CO2e per unit, unit label).
pub const DEFAULT_FACTORS: [(&str, f64, &str); 5] = [
    (SOURCE_ELECTRICITY, 0.708, "kg_co2e_per_kwh"),
    (SOURCE_BUS_DIESEL, 2.68, "kg_co2e_per_liter"),
    (SOURCE_CANTEEN_LPG, 2.93, "kg_co2e_per_kg"),
    (SOURCE_WASTE_LANDFILL, 1.25, "kg_co2e_per_kg"),
    (SOURCE_HUMAN_DAILY, DEFAULT_HUMAN_FACTOR_KG, "kg_co2e_per_person_per_day"),
];

// ---- Environment ----

/// Log filter variable read by `init_tracing`.
pub const LOG_ENV: &str = "CARBON_LOG";

/// Filter used when `CARBON_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str =
    "carbon_core=info,carbon_storage=info,carbon_analysis=info,carbon_cli=info";

/// Bearer token variable read by the CLI.
pub const TOKEN_ENV: &str = "CARBON_TOKEN";
