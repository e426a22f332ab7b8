//! Core library modules for shiftlog.
//!
//! - **Computation**: [`hours`] shift lengths, [`entry`] normalization and periods
//! - **Output**: [`export`] timesheets, [`view`] console tables, [`formatter`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`], [`error`]
//!
//! ## Usage
//!
//! ```rust
//! use shiftlog::libs::entry::{normalize, NewEntry};
//!
//! let fields = normalize(&NewEntry::new("2024-01-05", "22:00", "06:00", None))?;
//! assert_eq!(fields.total_hours, 8.0);
//! assert_eq!(fields.day, "Friday");
//! # Ok::<(), shiftlog::libs::error::EntryError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod hours;
pub mod messages;
pub mod view;
