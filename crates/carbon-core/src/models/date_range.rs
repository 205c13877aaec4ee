//! Inclusive calendar date windows for reports.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::errors::InputError;

/// An inclusive `[start, end]` window. Always normalized so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the bounds if they arrive reversed.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Parse two `YYYY-MM-DD` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, InputError> {
        let start = parse_bound("start", start)?;
        let end = parse_bound("end", end)?;
        Ok(Self::new(start, end))
    }

    /// The `days`-long window ending on `today`.
    pub fn trailing(today: NaiveDate, days: u32) -> Result<Self, InputError> {
        let start = shift_back(today, i64::from(days))?;
        Ok(Self::new(start, today))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Window length used for comparisons: `max(end - start, 1)` in days.
    pub fn window_days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }

    /// The equally long window immediately preceding this one:
    /// `[start - window_days, start)`, returned as an inclusive range.
    ///
    /// Fails when the preceding window falls outside the calendar.
    pub fn previous_period(&self) -> Result<Self, InputError> {
        let prev_start = shift_back(self.start, self.window_days())?;
        let prev_end = shift_back(self.start, 1)?;
        Ok(Self::new(prev_start, prev_end))
    }
}

fn shift_back(date: NaiveDate, days: i64) -> Result<NaiveDate, InputError> {
    date.checked_sub_signed(Duration::days(days))
        .ok_or_else(|| InputError::InvalidDateRange {
            message: format!("{days} days before {date} is outside the supported calendar"),
        })
}

fn parse_bound(field: &str, value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        InputError::InvalidDateRange {
            message: format!("{field} date \"{value}\" is not a YYYY-MM-DD calendar date"),
        }
    })
}
