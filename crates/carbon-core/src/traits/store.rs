use crate::errors::StorageError;
use crate::models::{
    ActivityEmission, ActivityRecord, CumulativeHumanStats, DateRange, EmissionFactor,
    HumanEmission, HumanPopulationRecord, SourceTotal,
};

/// Store client consumed by the aggregation, recommendation, and mutation paths.
///
/// Implementations acquire and release connections per call. Empty results are
/// empty vectors or zeroed stats, never errors.
pub trait EmissionStore: Send + Sync {
    // --- Reporting reads ---

    /// Activity rows in `range`, inner-joined to their factors, ordered by date.
    fn fetch_activity(&self, range: &DateRange) -> Result<Vec<ActivityEmission>, StorageError>;

    /// Population rows in `range`, ordered by date.
    fn fetch_human(
        &self,
        range: &DateRange,
        kg_per_person_day: f64,
    ) -> Result<Vec<HumanEmission>, StorageError>;

    /// Whole-table population statistics.
    fn fetch_human_cumulative(
        &self,
        kg_per_person_day: f64,
    ) -> Result<CumulativeHumanStats, StorageError>;

    /// All-time emissions per source, descending by total.
    fn fetch_source_totals_alltime(&self) -> Result<Vec<SourceTotal>, StorageError>;

    // --- Mutations ---

    /// Last-writer-wins upsert keyed on date. Returns the stored row.
    fn upsert_human(
        &self,
        record: &HumanPopulationRecord,
    ) -> Result<HumanPopulationRecord, StorageError>;

    fn insert_activity(&self, record: &ActivityRecord) -> Result<i64, StorageError>;

    /// Insert all records or none.
    fn insert_activity_batch(&self, records: &[ActivityRecord]) -> Result<usize, StorageError>;

    fn count_activity(&self) -> Result<u64, StorageError>;

    // --- Factor table ---

    fn upsert_factor(&self, factor: &EmissionFactor) -> Result<(), StorageError>;
    fn get_factor(&self, source_type: &str) -> Result<Option<EmissionFactor>, StorageError>;
    fn list_factors(&self) -> Result<Vec<EmissionFactor>, StorageError>;
}
