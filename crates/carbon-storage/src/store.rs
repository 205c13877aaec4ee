//! SqliteStore: owns the DatabaseManager and implements EmissionStore.

use std::path::Path;

use carbon_core::config::StorageConfig;
use carbon_core::errors::StorageError;
use carbon_core::models::{
    ActivityEmission, ActivityRecord, CumulativeHumanStats, DateRange, EmissionFactor,
    HumanEmission, HumanPopulationRecord, SourceTotal,
};
use carbon_core::traits::EmissionStore;

use crate::connection::DatabaseManager;
use crate::queries::{activity, factors, human, seed};

pub struct SqliteStore {
    db: DatabaseManager,
}

impl SqliteStore {
    /// Open a file-backed store.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path, read_pool_size)?,
        })
    }

    /// Open the store described by `config`.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open(&config.effective_db_path(), config.effective_read_pool_size())
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Load the demo dataset into an empty store. Returns rows inserted.
    pub fn seed_sample_data(&self) -> Result<usize, StorageError> {
        self.db.with_writer(seed::seed_sample_data)
    }

    pub fn count_human(&self) -> Result<u64, StorageError> {
        self.db.with_reader(human::count)
    }
}

impl EmissionStore for SqliteStore {
    fn fetch_activity(&self, range: &DateRange) -> Result<Vec<ActivityEmission>, StorageError> {
        self.db
            .with_reader(|conn| activity::query_emissions_in_range(conn, range))
    }

    fn fetch_human(
        &self,
        range: &DateRange,
        kg_per_person_day: f64,
    ) -> Result<Vec<HumanEmission>, StorageError> {
        self.db
            .with_reader(|conn| human::query_in_range(conn, range, kg_per_person_day))
    }

    fn fetch_human_cumulative(
        &self,
        kg_per_person_day: f64,
    ) -> Result<CumulativeHumanStats, StorageError> {
        self.db
            .with_reader(|conn| human::cumulative(conn, kg_per_person_day))
    }

    fn fetch_source_totals_alltime(&self) -> Result<Vec<SourceTotal>, StorageError> {
        self.db.with_reader(activity::query_source_totals)
    }

    fn upsert_human(
        &self,
        record: &HumanPopulationRecord,
    ) -> Result<HumanPopulationRecord, StorageError> {
        let stored = self.db.with_writer(|conn| human::upsert(conn, record))?;
        tracing::debug!(date = %stored.date, total = stored.total_count(), "upserted population");
        Ok(stored)
    }

    fn insert_activity(&self, record: &ActivityRecord) -> Result<i64, StorageError> {
        self.db
            .with_writer(|conn| activity::insert_activity(conn, record))
    }

    fn insert_activity_batch(&self, records: &[ActivityRecord]) -> Result<usize, StorageError> {
        self.db
            .with_writer(|conn| activity::insert_activity_batch(conn, records))
    }

    fn count_activity(&self) -> Result<u64, StorageError> {
        self.db.with_reader(activity::count)
    }

    fn upsert_factor(&self, factor: &EmissionFactor) -> Result<(), StorageError> {
        self.db.with_writer(|conn| factors::upsert_factor(conn, factor))
    }

    fn get_factor(&self, source_type: &str) -> Result<Option<EmissionFactor>, StorageError> {
        self.db
            .with_reader(|conn| factors::get_factor(conn, source_type))
    }

    fn list_factors(&self) -> Result<Vec<EmissionFactor>, StorageError> {
        self.db.with_reader(factors::list_factors)
    }
}
