//! Calendar-day type used to key daily cash flows.
//!
//! Only the calendar day is significant: time-of-day information carried by
//! raw input strings is discarded when parsing.
//!
//! # Examples
//!
//! ```
//! use cashrisk_core::types::time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 30).unwrap();
//! let later = start.add_days(3).unwrap();
//!
//! assert_eq!(later.to_string(), "2024-02-02");
//! assert_eq!(later - start, 3);
//! ```

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe calendar day wrapper around chrono::NaiveDate.
///
/// Formats and parses as ISO 8601 (`YYYY-MM-DD`). Ordering is chronological,
/// which makes `Date` usable directly as a `BTreeMap` key when grouping
/// flows by day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Earliest representable day.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// Latest representable day.
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Creates a Date from year, month, and day components.
    ///
    /// # Examples
    ///
    /// ```
    /// use cashrisk_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a strict ISO 8601 date string (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Parses the calendar-day prefix of a date or timestamp string.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[...]` and
    /// `YYYY-MM-DD HH:MM[...]`. Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use cashrisk_core::types::time::Date;
    ///
    /// let a = Date::parse_day("2024-03-05T17:45:00Z").unwrap();
    /// let b = Date::parse_day(" 2024-03-05 09:00 ").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Date::parse_day("").is_err());
    /// ```
    pub fn parse_day(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::ParseError("empty date".to_string()));
        }
        let day = trimmed
            .split(|c: char| c == 'T' || c == ' ')
            .next()
            .unwrap_or(trimmed);
        Self::parse(day)
    }

    /// Returns the date shifted by `days` calendar days (negative moves back),
    /// or `None` if the result falls outside the representable range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        let delta = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(delta)
        } else {
            self.0.checked_sub_days(delta)
        };
        shifted.map(Date)
    }

    /// Returns the following calendar day, or `None` at the last representable day.
    pub fn succ(self) -> Option<Self> {
        self.add_days(1)
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse_day(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
