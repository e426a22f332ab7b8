//! Domain errors raised while turning raw input into time entries.
//!
//! These are client-input failures: the caller is expected to reject the
//! whole write rather than recover locally. Application plumbing wraps them
//! in `anyhow::Error`; the HTTP layer maps them to `400 Bad Request`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// A wall-clock time was not `HH:MM` with hour 00-23 and minute 00-59.
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTime(String),

    /// A date was missing or could not be parsed.
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A period month was neither a month name nor a number 1-12.
    #[error("Invalid month: '{0}'")]
    InvalidMonth(String),

    /// A computed shift reached 24 hours or more.
    #[error("Shift from {0} to {1} exceeds 24 hours")]
    ShiftTooLong(String, String),
}

pub type EntryResult<T> = Result<T, EntryError>;
