//! Query modules for each table.

pub mod activity;
pub mod factors;
pub mod human;
pub mod seed;
pub mod util;
