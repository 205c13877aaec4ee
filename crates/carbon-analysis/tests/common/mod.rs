//! Shared fixtures: an in-memory fake store and date helpers.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use carbon_core::errors::StorageError;
use carbon_core::models::{
    ActivityEmission, ActivityRecord, CumulativeHumanStats, DateRange, EmissionFactor,
    HumanEmission, HumanPopulationRecord, SourceTotal,
};
use carbon_core::traits::EmissionStore;
use carbon_storage::SqliteStore;
use chrono::NaiveDate;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn sqlite() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().unwrap())
}

/// Vec-backed store. Optionally fails the Nth reporting read with
/// `StorageError::Unavailable`.
#[derive(Default)]
pub struct FakeStore {
    factors: Mutex<BTreeMap<String, EmissionFactor>>,
    activity: Mutex<Vec<ActivityRecord>>,
    human: Mutex<BTreeMap<NaiveDate, HumanPopulationRecord>>,
    reads: AtomicUsize,
    fail_on_read: Option<usize>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_read(n: usize) -> Self {
        Self {
            fail_on_read: Some(n),
            ..Self::default()
        }
    }

    pub fn with_factor(self, source_type: &str, factor: f64) -> Self {
        self.upsert_factor(&EmissionFactor::new(source_type, factor, "kg_co2e_per_unit"))
            .unwrap();
        self
    }

    pub fn with_activity(self, date: NaiveDate, source_type: &str, raw_value: f64) -> Self {
        self.insert_activity(&ActivityRecord::new(date, source_type, raw_value, "unit"))
            .unwrap();
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn read(&self) -> Result<(), StorageError> {
        let n = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_read == Some(n) {
            return Err(StorageError::Unavailable {
                message: format!("read {n} refused"),
            });
        }
        Ok(())
    }
}

impl EmissionStore for FakeStore {
    fn fetch_activity(&self, range: &DateRange) -> Result<Vec<ActivityEmission>, StorageError> {
        self.read()?;
        let factors = self.factors.lock().unwrap();
        let mut rows: Vec<_> = self
            .activity
            .lock()
            .unwrap()
            .iter()
            .filter(|r| range.contains(r.date))
            .filter_map(|r| {
                factors
                    .get(&r.source_type)
                    .map(|f| ActivityEmission::from_record(r.clone(), f.factor))
            })
            .collect();
        rows.sort_by_key(|r| r.date);
        Ok(rows)
    }

    fn fetch_human(
        &self,
        range: &DateRange,
        kg_per_person_day: f64,
    ) -> Result<Vec<HumanEmission>, StorageError> {
        self.read()?;
        Ok(self
            .human
            .lock()
            .unwrap()
            .values()
            .filter(|r| range.contains(r.date))
            .map(|r| HumanEmission::from_record(r, kg_per_person_day))
            .collect())
    }

    fn fetch_human_cumulative(
        &self,
        kg_per_person_day: f64,
    ) -> Result<CumulativeHumanStats, StorageError> {
        self.read()?;
        let human = self.human.lock().unwrap();
        let n = human.len() as u64;
        if n == 0 {
            return Ok(CumulativeHumanStats::default());
        }
        Ok(CumulativeHumanStats {
            total_emissions: human.values().map(|r| r.emissions_tonnes(kg_per_person_day)).sum(),
            record_count: n,
            avg_students: human.values().map(|r| u64::from(r.student_count)).sum::<u64>() / n,
            avg_staff: human.values().map(|r| u64::from(r.staff_count)).sum::<u64>() / n,
        })
    }

    fn fetch_source_totals_alltime(&self) -> Result<Vec<SourceTotal>, StorageError> {
        self.read()?;
        let factors = self.factors.lock().unwrap();
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for r in self.activity.lock().unwrap().iter() {
            if let Some(f) = factors.get(&r.source_type) {
                *totals.entry(r.source_type.clone()).or_default() +=
                    r.raw_value * f.factor / 1000.0;
            }
        }
        let mut totals: Vec<_> = totals
            .into_iter()
            .map(|(source_type, total_emissions)| SourceTotal {
                source_type,
                total_emissions,
            })
            .collect();
        totals.sort_by(|a, b| b.total_emissions.total_cmp(&a.total_emissions));
        Ok(totals)
    }

    fn upsert_human(
        &self,
        record: &HumanPopulationRecord,
    ) -> Result<HumanPopulationRecord, StorageError> {
        self.human.lock().unwrap().insert(record.date, *record);
        Ok(*record)
    }

    fn insert_activity(&self, record: &ActivityRecord) -> Result<i64, StorageError> {
        let mut activity = self.activity.lock().unwrap();
        activity.push(record.clone());
        Ok(activity.len() as i64)
    }

    fn insert_activity_batch(&self, records: &[ActivityRecord]) -> Result<usize, StorageError> {
        self.activity.lock().unwrap().extend_from_slice(records);
        Ok(records.len())
    }

    fn count_activity(&self) -> Result<u64, StorageError> {
        Ok(self.activity.lock().unwrap().len() as u64)
    }

    fn upsert_factor(&self, factor: &EmissionFactor) -> Result<(), StorageError> {
        self.factors
            .lock()
            .unwrap()
            .insert(factor.source_type.clone(), factor.clone());
        Ok(())
    }

    fn get_factor(&self, source_type: &str) -> Result<Option<EmissionFactor>, StorageError> {
        Ok(self.factors.lock().unwrap().get(source_type).cloned())
    }

    fn list_factors(&self) -> Result<Vec<EmissionFactor>, StorageError> {
        Ok(self.factors.lock().unwrap().values().cloned().collect())
    }
}
