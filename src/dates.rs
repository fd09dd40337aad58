//! Calendar date parsing and inclusive date ranges.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Errors raised while turning caller input into a date range
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeError {
    #[error("Invalid date format: {value:?}")]
    InvalidDateFormat { value: String },

    #[error("End date cannot be before start date ({start} > {end})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS`;
/// timestamps are truncated to their date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateRangeError> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .map_err(|_| DateRangeError::InvalidDateFormat {
            value: value.to_string(),
        })
}

/// Inclusive range of calendar days with `start <= end`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl fmt::Debug for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl DateRange {
    /// Build a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both ends, then validate the order.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// A single-day range
    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, always at least 1
    pub fn days(&self) -> u32 {
        // end >= start, and chrono dates span far less than u32::MAX days
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Every day of the range in order
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
