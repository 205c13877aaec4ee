//! # carbon-storage
//!
//! SQLite persistence for the carbon ledger. `DatabaseManager` owns the
//! connections; `queries` holds one module per table; `SqliteStore` exposes
//! them through the `EmissionStore` trait.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use store::SqliteStore;
