//! Trait seams injected into the engines.

pub mod store;

pub use store::EmissionStore;
