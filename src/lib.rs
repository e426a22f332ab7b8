//! # Shiftlog - personal timesheet tracker
//!
//! Records work shifts (date, start, end, site), derives their length and
//! calendar fields, and exports a month as a styled spreadsheet.
//!
//! ## Features
//!
//! - **Shift arithmetic**: `HH:MM` pairs to hours, overnight shifts included
//! - **Storage**: SQLite with versioned migrations
//! - **Export**: xlsx timesheets with a `TOTAL` row, plus CSV and JSON
//! - **HTTP API**: JSON CRUD, monthly listing and download
//! - **CLI**: the same operations from a terminal
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
