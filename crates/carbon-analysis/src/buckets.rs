//! Calendar bucketing for trend series.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

/// ISO-8601 week label on the ISO week-year, e.g. `2025-W03`.
pub fn week_label(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Calendar month label, e.g. `2025-01`.
pub fn month_label(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}

/// Emissions summed per day, ISO week, month, and year.
///
/// Keys sort ascending, so iterating any map yields the series in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendBuckets {
    pub daily: BTreeMap<NaiveDate, f64>,
    pub weekly: BTreeMap<String, f64>,
    pub monthly: BTreeMap<String, f64>,
    pub yearly: BTreeMap<i32, f64>,
}

impl TrendBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample to all four granularities.
    pub fn add(&mut self, date: NaiveDate, tonnes: f64) {
        *self.daily.entry(date).or_insert(0.0) += tonnes;
        *self.weekly.entry(week_label(date)).or_insert(0.0) += tonnes;
        *self.monthly.entry(month_label(date)).or_insert(0.0) += tonnes;
        *self.yearly.entry(date.year()).or_insert(0.0) += tonnes;
    }

    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}

impl Extend<(NaiveDate, f64)> for TrendBuckets {
    fn extend<I: IntoIterator<Item = (NaiveDate, f64)>>(&mut self, iter: I) {
        for (date, tonnes) in iter {
            self.add(date, tonnes);
        }
    }
}

impl FromIterator<(NaiveDate, f64)> for TrendBuckets {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, f64)>>(iter: I) -> Self {
        let mut buckets = Self::new();
        buckets.extend(iter);
        buckets
    }
}
