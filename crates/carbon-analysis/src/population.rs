//! Validated write paths: population upserts and activity entry.
//!
//! Inputs arrive loosely typed (JSON bodies, CLI strings) and are checked
//! here before anything reaches the store. A rejected input changes nothing.

use carbon_core::constants::DATE_FORMAT;
use carbon_core::errors::{CarbonResult, InputError};
use carbon_core::models::{ActivityRecord, HumanPopulationRecord};
use carbon_core::traits::EmissionStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregation::HumanFactorPolicy;
use crate::report::payload::{round, CumulativeHumanPayload};

/// A population submission. Counts may be JSON integers or integer strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationInput {
    pub date: Option<String>,
    pub student_count: Option<Value>,
    pub staff_count: Option<Value>,
}

impl PopulationInput {
    pub fn new(date: &str, student_count: impl Into<Value>, staff_count: impl Into<Value>) -> Self {
        Self {
            date: Some(date.to_string()),
            student_count: Some(student_count.into()),
            staff_count: Some(staff_count.into()),
        }
    }

    pub fn validate(&self) -> Result<HumanPopulationRecord, InputError> {
        let date = parse_date("date", self.date.as_deref())?;
        let students = parse_count("student_count", self.student_count.as_ref())?;
        let staff = parse_count("staff_count", self.staff_count.as_ref())?;
        Ok(HumanPopulationRecord::new(date, students, staff))
    }
}

/// The stored day entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationEntry {
    pub date: NaiveDate,
    pub student_count: u32,
    pub staff_count: u32,
    pub total_count: u64,
    #[serde(serialize_with = "round::three")]
    pub this_day_emissions_tonnes: f64,
}

/// Response to a population upsert: the day plus fresh all-time stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationRecorded {
    pub data: PopulationEntry,
    pub cumulative_stats: CumulativeHumanPayload,
}

/// Validate, upsert, then recompute cumulative stats from the whole table.
pub fn record_population(
    store: &dyn EmissionStore,
    human_factor: HumanFactorPolicy,
    input: &PopulationInput,
) -> CarbonResult<PopulationRecorded> {
    let record = input.validate()?;
    let kg = human_factor.resolve(store)?;

    let stored = store.upsert_human(&record)?;
    let cumulative = store.fetch_human_cumulative(kg)?;

    Ok(PopulationRecorded {
        data: PopulationEntry {
            date: stored.date,
            student_count: stored.student_count,
            staff_count: stored.staff_count,
            total_count: stored.total_count(),
            this_day_emissions_tonnes: stored.emissions_tonnes(kg),
        },
        cumulative_stats: CumulativeHumanPayload::from(cumulative),
    })
}

/// One activity reading. `raw_value` may be a JSON number or numeric string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityInput {
    pub date: Option<String>,
    pub source_type: Option<String>,
    pub raw_value: Option<Value>,
    pub unit: Option<String>,
}

impl ActivityInput {
    pub fn new(date: &str, source_type: &str, raw_value: impl Into<Value>, unit: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            source_type: Some(source_type.to_string()),
            raw_value: Some(raw_value.into()),
            unit: Some(unit.to_string()),
        }
    }

    pub fn validate(&self) -> Result<ActivityRecord, InputError> {
        let date = parse_date("date", self.date.as_deref())?;
        let source_type = required_text("source_type", self.source_type.as_deref())?;
        let raw_value = parse_quantity("raw_value", self.raw_value.as_ref())?;
        let unit = required_text("unit", self.unit.as_deref())?;
        Ok(ActivityRecord::new(date, source_type, raw_value, unit))
    }
}

pub fn record_activity(store: &dyn EmissionStore, input: &ActivityInput) -> CarbonResult<i64> {
    let record = input.validate()?;
    Ok(store.insert_activity(&record)?)
}

/// Validate every row first; the first bad row rejects the whole batch.
pub fn record_activity_batch(
    store: &dyn EmissionStore,
    inputs: &[ActivityInput],
) -> CarbonResult<usize> {
    if inputs.is_empty() {
        return Err(InputError::invalid("records", "at least one record is required").into());
    }

    let records = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            input.validate().map_err(|e| InputError::InvalidRow {
                row: i + 1,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(store.insert_activity_batch(&records)?)
}

fn parse_date(field: &str, value: Option<&str>) -> Result<NaiveDate, InputError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| InputError::missing(field))?;
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| InputError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn required_text(field: &str, value: Option<&str>) -> Result<String, InputError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| InputError::missing(field))
}

fn parse_count(field: &str, value: Option<&Value>) -> Result<u32, InputError> {
    let n: i64 = match value {
        None | Some(Value::Null) => return Err(InputError::missing(field)),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i,
            // Whole floats such as 3000.0 are accepted; 2.5 is not.
            (None, Some(f)) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => f as i64,
            _ => return Err(not_an_integer(field, &n.to_string())),
        },
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| not_an_integer(field, s))?,
        Some(other) => return Err(not_an_integer(field, &other.to_string())),
    };

    if n < 0 {
        return Err(InputError::NegativeCount {
            field: field.to_string(),
            value: n,
        });
    }
    u32::try_from(n).map_err(|_| InputError::invalid(field, format!("{n} is too large")))
}

fn parse_quantity(field: &str, value: Option<&Value>) -> Result<f64, InputError> {
    let v = match value {
        None | Some(Value::Null) => return Err(InputError::missing(field)),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    let v = v.ok_or_else(|| {
        InputError::invalid(field, format!("{} is not a number", display(value)))
    })?;
    if !v.is_finite() {
        return Err(InputError::invalid(field, "must be finite"));
    }
    if v < 0.0 {
        return Err(InputError::invalid(field, "must be non-negative"));
    }
    Ok(v)
}

fn not_an_integer(field: &str, value: &str) -> InputError {
    InputError::NotAnInteger {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn display(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => format!("\"{s}\""),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}
