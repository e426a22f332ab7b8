//! Shift duration calculation.
//!
//! Converts a start/end wall-clock pair into elapsed hours. An end time
//! earlier than the start time is read as a shift crossing midnight, so
//! `22:00`-`06:00` is eight hours. Equal times are a zero-length shift.

use super::error::{EntryError, EntryResult};
use chrono::{NaiveTime, Timelike};

/// Hours in a day, added when a shift wraps past midnight.
const HOURS_PER_DAY: f64 = 24.0;

/// Parses a strict `HH:MM` wall-clock time.
///
/// Both parts must be one or two ASCII digits; chrono then rejects hours
/// outside 0-23 and minutes outside 0-59.
pub fn parse_time(value: &str) -> EntryResult<NaiveTime> {
    let invalid = || EntryError::InvalidTime(value.to_string());

    let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
    let is_part = |part: &str| (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit());
    if !is_part(hour) || !is_part(minute) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Returns the number of hours between `start` and `end`, rounded to two
/// decimal places.
///
/// # Examples
///
/// ```rust
/// use shiftlog::libs::hours::compute_hours;
///
/// assert_eq!(compute_hours("09:00", "17:00").unwrap(), 8.0);
/// assert_eq!(compute_hours("22:00", "06:00").unwrap(), 8.0);
/// assert_eq!(compute_hours("09:15", "17:45").unwrap(), 8.5);
/// ```
pub fn compute_hours(start: &str, end: &str) -> EntryResult<f64> {
    let start_total = fractional_hours(parse_time(start)?);
    let end_total = fractional_hours(parse_time(end)?);

    let mut diff = end_total - start_total;
    if diff < 0.0 {
        diff += HOURS_PER_DAY;
    }

    let hours = round_hours(diff);
    if hours >= HOURS_PER_DAY {
        return Err(EntryError::ShiftTooLong(start.to_string(), end.to_string()));
    }
    Ok(hours)
}

/// Rounds to two decimal places, half away from zero.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

fn fractional_hours(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_shift() {
        assert_eq!(compute_hours("09:00", "17:00").unwrap(), 8.0);
    }

    #[test]
    fn test_shift_across_midnight() {
        assert_eq!(compute_hours("22:00", "06:00").unwrap(), 8.0);
        assert_eq!(compute_hours("23:30", "00:15").unwrap(), 0.75);
    }

    #[test]
    fn test_equal_times_is_zero_not_a_full_day() {
        assert_eq!(compute_hours("09:00", "09:00").unwrap(), 0.0);
    }

    #[test]
    fn test_quarter_hours() {
        assert_eq!(compute_hours("09:15", "17:45").unwrap(), 8.5);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 20 minutes is a third of an hour
        assert_eq!(compute_hours("09:00", "09:20").unwrap(), 0.33);
        assert_eq!(compute_hours("09:00", "09:40").unwrap(), 0.67);
    }

    #[test]
    fn test_longest_possible_shift_stays_below_a_day() {
        assert_eq!(compute_hours("00:00", "23:59").unwrap(), 23.98);
        assert_eq!(compute_hours("00:01", "00:00").unwrap(), 23.98);
    }

    #[test]
    fn test_single_digit_hour_is_accepted() {
        assert_eq!(compute_hours("9:00", "17:30").unwrap(), 8.5);
    }

    #[test]
    fn test_malformed_times_are_rejected() {
        for bad in ["", "0900", "9", "25:00", "24:00", "12:60", "ab:cd", "12:5x", "-1:00", "12:00:00", "123:00"] {
            let err = compute_hours(bad, "17:00").unwrap_err();
            assert_eq!(err, EntryError::InvalidTime(bad.to_string()), "input {:?}", bad);
        }
        assert!(matches!(compute_hours("09:00", "17"), Err(EntryError::InvalidTime(_))));
    }

    #[test]
    fn test_round_hours_half_away_from_zero() {
        assert_eq!(round_hours(1.005_000_1), 1.01);
        assert_eq!(round_hours(2.344), 2.34);
        assert_eq!(round_hours(0.0), 0.0);
    }
}
