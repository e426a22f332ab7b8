//! Hour formatting utilities for user-friendly display.
//!
//! Shift lengths are stored as decimal hours. They are shown in two ways:
//!
//! - **Decimal**: two fixed decimals, as in the export totals row (`"15.50"`)
//! - **Clock**: `HH:MM`, as in the terminal table view (`"15:30"`)
//!
//! Negative values never occur for stored entries; they are clamped to zero
//! so a display path can never panic or print a minus sign.
//!
//! ## Examples
//!
//! ```rust
//! use shiftlog::libs::formatter::{format_hours, format_hours_hm};
//!
//! assert_eq!(format_hours(15.5), "15.50");
//! assert_eq!(format_hours_hm(8.25), "08:15");
//! ```

/// Formats decimal hours with exactly two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", non_negative(hours))
}

/// Formats decimal hours as `HH:MM`, rounding to the nearest minute.
pub fn format_hours_hm(hours: f64) -> String {
    // Whole minutes first: 7.999 hours reads 08:00
    let minutes = (non_negative(hours) * 60.0).round() as i64;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// `f64::max` may keep the sign of -0.0, so zero is returned explicitly.
fn non_negative(hours: f64) -> f64 {
    if hours > 0.0 {
        hours
    } else {
        0.0
    }
}
