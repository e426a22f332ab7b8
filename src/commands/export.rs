//! Writes one month's timesheet to a file.
//!
//! The default format is the styled xlsx workbook served by the HTTP API;
//! CSV and JSON carry the same rows and total.

use crate::{
    db::entries::Entries,
    libs::{
        entry::Period,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Year of the period
    year: i32,
    /// Month of the period, by name or number
    month: String,
    /// Output format
    #[arg(short, long, value_enum, default_value = "excel")]
    format: ExportFormat,
    /// Output path; `timesheet-<Month>-<Year>.<ext>` in the working directory by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let period = Period::parse(export_args.year, &export_args.month)?;
    msg_info!(Message::ExportingPeriod(period.to_string(), format!("{:?}", export_args.format)));

    let entries = Entries::new()?.fetch_period(&period)?;
    Exporter::new(export_args.format).export_to_file(&entries, &period, export_args.output)?;
    Ok(())
}
