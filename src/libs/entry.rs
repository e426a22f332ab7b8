//! Time entry model and normalization.
//!
//! A raw submission carries only a date, two wall-clock times and an optional
//! site location. [`normalize`] turns it into the complete field set that the
//! store persists: the shift length plus the weekday name, month name and year
//! derived from the date. These derived fields are stored alongside the date
//! so the store can filter a month by `(year, month)` without date arithmetic.
//!
//! ## Usage
//!
//! ```rust
//! use shiftlog::libs::entry::{normalize, NewEntry};
//!
//! let raw = NewEntry::new("2024-01-05", "22:00", "06:00", None);
//! let fields = normalize(&raw)?;
//! assert_eq!(fields.total_hours, 8.0);
//! assert_eq!(fields.day, "Friday");
//! assert_eq!(fields.month, "January");
//! assert_eq!(fields.site_location, "Office");
//! # Ok::<(), shiftlog::libs::error::EntryError>(())
//! ```

use super::error::{EntryError, EntryResult};
use super::hours::{compute_hours, parse_time};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Site recorded when a submission leaves the location blank.
pub const DEFAULT_SITE: &str = "Office";

/// Weekday names indexed by days from Sunday (Sunday = 0).
pub const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Month names indexed from zero (January = 0).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A time entry as submitted by a client, before any derived field exists.
///
/// Every field defaults to empty so a missing date or time surfaces as a
/// parse error from [`normalize`] rather than as a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEntry {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub site_location: Option<String>,
}

impl NewEntry {
    pub fn new(date: &str, start_time: &str, end_time: &str, site_location: Option<&str>) -> Self {
        NewEntry {
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            site_location: site_location.map(str::to_string),
        }
    }
}

/// Normalized entry fields ready for storage; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub total_hours: f64,
    pub day: String,
    pub month: String,
    pub year: i32,
    pub site_location: String,
}

/// A persisted time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub total_hours: f64,
    pub day: String,
    pub month: String,
    pub year: i32,
    pub site_location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Builds the complete field set for a raw submission.
///
/// Pure: the same input always yields the same fields.
///
/// # Errors
///
/// - [`EntryError::InvalidDate`] when the date is missing or malformed
/// - [`EntryError::InvalidTime`] when either time is not `HH:MM`
pub fn normalize(raw: &NewEntry) -> EntryResult<EntryFields> {
    let date = parse_entry_date(&raw.date)?;
    let total_hours = compute_hours(&raw.start_time, &raw.end_time)?;

    let site_location = match raw.site_location.as_deref().map(str::trim) {
        Some(site) if !site.is_empty() => site.to_string(),
        _ => DEFAULT_SITE.to_string(),
    };

    Ok(EntryFields {
        date,
        start_time: parse_time(&raw.start_time)?.format("%H:%M").to_string(),
        end_time: parse_time(&raw.end_time)?.format("%H:%M").to_string(),
        total_hours,
        day: weekday_name(date).to_string(),
        month: month_name(date.month()).to_string(),
        year: date.year(),
        site_location,
    })
}

/// Parses an entry date.
///
/// Accepts `YYYY-MM-DD` as well as full timestamps (`2024-01-05T00:00:00.000Z`),
/// in which case the calendar date as written is used.
pub fn parse_entry_date(value: &str) -> EntryResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(stamp.date());
    }

    Err(EntryError::InvalidDate(value.to_string()))
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Full name of a 1-based month number. Out-of-range numbers are clamped.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// A `(year, month)` pair used to select entries for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> EntryResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EntryError::InvalidMonth(month.to_string()));
        }
        Ok(Period { year, month })
    }

    /// Parses a month given either as a name (any case, `"jan"` style
    /// abbreviations included) or as a number 1-12.
    pub fn parse(year: i32, month: &str) -> EntryResult<Self> {
        Period::new(year, parse_month(month)?)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// The store filter selecting this period's entries.
    pub fn filter(&self) -> EntryFilter {
        EntryFilter {
            year: Some(self.year),
            month: Some(self.month_name().to_string()),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Resolves a month name or number to a 1-based month number.
pub fn parse_month(value: &str) -> EntryResult<u32> {
    let trimmed = value.trim();

    if let Ok(number) = trimmed.parse::<u32>() {
        return match number {
            1..=12 => Ok(number),
            _ => Err(EntryError::InvalidMonth(value.to_string())),
        };
    }

    let lower = trimmed.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == lower || (lower.len() >= 3 && name.starts_with(&lower))
        })
        .map(|index| index as u32 + 1)
        .ok_or_else(|| EntryError::InvalidMonth(value.to_string()))
}

/// Store query filter; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub year: Option<i32>,
    pub month: Option<String>,
}
