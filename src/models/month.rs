//! Date and month-key utilities
//!
//! A month key (`YYYY-MM`) buckets transactions for filtering. Calendar dates
//! are `NaiveDate`, whose ordering matches lexicographic order of their ISO
//! `YYYY-MM-DD` form.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// ISO calendar date format used everywhere in the ledger
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A year-month bucket such as `2025-01`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::Validation(format!(
                "Invalid month {}: expected 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Month key of a calendar date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month key of today's UTC date
    pub fn current() -> Self {
        Self::of(today())
    }

    /// Parse `YYYY-MM`. A full `YYYY-MM-DD` date is also accepted and reduced
    /// to its month.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let s = s.trim();
        let invalid = || {
            LedgerError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", s))
        };

        let bytes = s.as_bytes();
        if bytes.len() < 7 || bytes[4] != b'-' || !s.is_char_boundary(7) {
            return Err(invalid());
        }
        let rest = &s[7..];
        if !rest.is_empty() && !rest.starts_with('-') {
            return Err(invalid());
        }
        if !s[..4].bytes().all(|b| b.is_ascii_digit()) || !s[5..7].bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The current instant
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
