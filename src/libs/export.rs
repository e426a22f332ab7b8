//! Monthly timesheet export.
//!
//! Renders a period's entries as a timesheet document. The layout is fixed
//! and shared by every output format:
//!
//! ```text
//! | Date       | Day    | Site Location | Start Time | End Time | Total Hours |
//! | 05/01/2024 | Friday | Office        | 09:00      | 17:00    | 8.00        |
//! | 12/01/2024 | Friday | Depot         | 09:00      | 16:30    | 7.50        |
//! |            |        |               |            |          |             |
//! | TOTAL      |        |               |            |          | 15.50       |
//! ```
//!
//! The Excel rendering is the primary output: one worksheet named after the
//! period, a bold header row on a blue fill and a bold totals row. CSV and
//! JSON carry the same rows for tools that cannot read spreadsheets.
//!
//! Entries are rendered in the order given. The store returns a period
//! sorted by date, and the exporter never filters.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::libs::export::{ExportFormat, Exporter};
//!
//! let bytes = Exporter::new(ExportFormat::Excel).render(&[], "January 2024")?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    libs::{
        entry::{Period, TimeEntry},
        formatter::format_hours,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Column headers in output order.
pub const HEADERS: [&str; 6] = ["Date", "Day", "Site Location", "Start Time", "End Time", "Total Hours"];

/// Label written in the first column of the totals row.
pub const TOTAL_LABEL: &str = "TOTAL";

const COLUMN_WIDTHS: [f64; 6] = [15.0, 12.0, 20.0, 12.0, 12.0, 12.0];
const HEADER_FILL: u32 = 0x4472C4;
const HOURS_COLUMN: u16 = 5;
const MAX_SHEET_NAME_LEN: usize = 31;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet (`.xlsx`) with styled header and totals rows.
    Excel,
    /// Comma-separated values with the same rows as the spreadsheet.
    Csv,
    /// Pretty-printed JSON with the full entries and the period total.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// One entry row as displayed in the timesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetRow {
    /// Date in `dd/mm/yyyy` display form.
    pub date: String,
    pub day: String,
    pub site_location: String,
    pub start_time: String,
    pub end_time: String,
    pub total_hours: f64,
}

/// Format-neutral timesheet layout built from a period's entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Timesheet {
    pub title: String,
    pub rows: Vec<TimesheetRow>,
    pub total_hours: f64,
}

impl Timesheet {
    pub fn build(entries: &[TimeEntry], title: &str) -> Self {
        let rows = entries
            .iter()
            .map(|entry| TimesheetRow {
                date: entry.date.format("%d/%m/%Y").to_string(),
                day: entry.day.clone(),
                site_location: entry.site_location.clone(),
                start_time: entry.start_time.clone(),
                end_time: entry.end_time.clone(),
                total_hours: entry.total_hours,
            })
            .collect();

        Timesheet {
            title: title.to_string(),
            rows,
            // An empty f64 sum is -0.0, which would print as "-0.00"
            total_hours: entries.iter().fold(0.0, |total, entry| total + entry.total_hours),
        }
    }

    /// The period total as it appears in the totals row, e.g. `"15.50"`.
    pub fn total_text(&self) -> String {
        format_hours(self.total_hours)
    }

    /// Zero-based row index of the totals row: header, entries, one blank row.
    pub fn total_row_index(&self) -> u32 {
        self.rows.len() as u32 + 2
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTimesheet<'a> {
    period: &'a str,
    entries: &'a [TimeEntry],
    total_hours: String,
}

/// Renders timesheets in one output format.
pub struct Exporter {
    format: ExportFormat,
}

impl Exporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Renders `entries` into an in-memory document titled `period_label`.
    ///
    /// An empty slice is not an error: the document still carries the header
    /// row and a `TOTAL` row of `0.00`.
    pub fn render(&self, entries: &[TimeEntry], period_label: &str) -> Result<Vec<u8>> {
        let sheet = Timesheet::build(entries, period_label);
        tracing::debug!(
            format = ?self.format,
            rows = sheet.rows.len(),
            total = %sheet.total_text(),
            "rendering timesheet '{}'",
            period_label
        );

        match self.format {
            ExportFormat::Excel => render_excel(&sheet),
            ExportFormat::Csv => render_csv(&sheet),
            ExportFormat::Json => render_json(&sheet, entries),
        }
    }

    /// Renders the period and writes it to `output`, or to
    /// [`Exporter::default_file_name`] in the working directory.
    pub fn export_to_file(&self, entries: &[TimeEntry], period: &Period, output: Option<PathBuf>) -> Result<PathBuf> {
        let bytes = self.render(entries, &period.to_string())?;
        let path = output.unwrap_or_else(|| PathBuf::from(self.default_file_name(period)));

        fs::write(&path, bytes)?;
        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(path)
    }

    /// File name offered for a period, e.g. `timesheet-January-2024.xlsx`.
    pub fn default_file_name(&self, period: &Period) -> String {
        format!("timesheet-{}-{}.{}", period.month_name(), period.year, self.format.extension())
    }
}

/// Renders `entries` as an xlsx document with one sheet named `period_label`.
pub fn export(entries: &[TimeEntry], period_label: &str) -> Result<Vec<u8>> {
    Exporter::new(ExportFormat::Excel).render(entries, period_label)
}

/// Makes a label usable as a worksheet name: no `[]:*?/\`, no leading or
/// trailing apostrophe, at most 31 characters.
pub fn sheet_name(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| if matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\') { '-' } else { c })
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'');

    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}

fn render_excel(sheet: &Timesheet) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(&sheet.title))?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid);
    let hours_format = Format::new().set_num_format("0.00");
    let total_format = Format::new().set_bold();

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        worksheet.set_column_width(col as u16, width)?;
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (index, row) in sheet.rows.iter().enumerate() {
        let r = index as u32 + 1;
        worksheet.write_string(r, 0, &row.date)?;
        worksheet.write_string(r, 1, &row.day)?;
        worksheet.write_string(r, 2, &row.site_location)?;
        worksheet.write_string(r, 3, &row.start_time)?;
        worksheet.write_string(r, 4, &row.end_time)?;
        worksheet.write_number_with_format(r, HOURS_COLUMN, row.total_hours, &hours_format)?;
    }

    let total_row = sheet.total_row_index();
    worksheet.write_string_with_format(total_row, 0, TOTAL_LABEL, &total_format)?;
    worksheet.write_string_with_format(total_row, HOURS_COLUMN, sheet.total_text(), &total_format)?;

    Ok(workbook.save_to_buffer()?)
}

fn render_csv(sheet: &Timesheet) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let blank = [""; 6];

    wtr.write_record(HEADERS)?;
    for row in &sheet.rows {
        wtr.write_record([
            row.date.clone(),
            row.day.clone(),
            row.site_location.clone(),
            row.start_time.clone(),
            row.end_time.clone(),
            format_hours(row.total_hours),
        ])?;
    }

    wtr.write_record(blank)?;
    let total = sheet.total_text();
    wtr.write_record([TOTAL_LABEL, "", "", "", "", total.as_str()])?;

    Ok(wtr.into_inner().map_err(|e| e.into_error())?)
}

fn render_json(sheet: &Timesheet, entries: &[TimeEntry]) -> Result<Vec<u8>> {
    let document = JsonTimesheet {
        period: &sheet.title,
        entries,
        total_hours: sheet.total_text(),
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(id: i64, date: &str, start: &str, end: &str, hours: f64) -> TimeEntry {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let stamp = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        TimeEntry {
            id,
            date,
            start_time: start.to_string(),
            end_time: end.to_string(),
            total_hours: hours,
            day: crate::libs::entry::weekday_name(date).to_string(),
            month: "January".to_string(),
            year: 2024,
            site_location: "Office".to_string(),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn test_timesheet_totals() {
        let entries = vec![
            entry(1, "2024-01-05", "09:00", "17:00", 8.0),
            entry(2, "2024-01-12", "09:00", "16:30", 7.5),
        ];
        let sheet = Timesheet::build(&entries, "January 2024");

        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].date, "05/01/2024");
        assert_eq!(sheet.rows[1].day, "Friday");
        assert_eq!(sheet.total_text(), "15.50");
        assert_eq!(sheet.total_row_index(), 4);
    }

    #[test]
    fn test_empty_timesheet() {
        let sheet = Timesheet::build(&[], "January 2024");
        assert!(sheet.rows.is_empty());
        assert_eq!(sheet.total_text(), "0.00");
        assert!(sheet.total_hours.is_sign_positive());
        assert_eq!(sheet.total_row_index(), 2);
    }

    #[test]
    fn test_total_of_thirds_formats_cleanly() {
        let entries: Vec<TimeEntry> = (1..=3).map(|i| entry(i, "2024-01-02", "09:00", "09:20", 0.33)).collect();
        assert_eq!(Timesheet::build(&entries, "t").total_text(), "0.99");
    }

    #[test]
    fn test_excel_is_a_zip_package() {
        let entries = vec![entry(1, "2024-01-05", "09:00", "17:00", 8.0)];
        let bytes = export(&entries, "January 2024").unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));

        let empty = export(&[], "January 2024").unwrap();
        assert!(empty.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_csv_layout() {
        let entries = vec![
            entry(1, "2024-01-05", "09:00", "17:00", 8.0),
            entry(2, "2024-01-12", "09:00", "16:30", 7.5),
        ];
        let bytes = Exporter::new(ExportFormat::Csv).render(&entries, "January 2024").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Date,Day,Site Location,Start Time,End Time,Total Hours");
        assert_eq!(lines[1], "05/01/2024,Friday,Office,09:00,17:00,8.00");
        assert_eq!(lines[2], "12/01/2024,Friday,Office,09:00,16:30,7.50");
        assert_eq!(lines[3], ",,,,,");
        assert_eq!(lines[4], "TOTAL,,,,,15.50");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_csv_empty_period() {
        let bytes = Exporter::new(ExportFormat::Csv).render(&[], "March 2024").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Date,Day,Site Location,Start Time,End Time,Total Hours", ",,,,,", "TOTAL,,,,,0.00"]);
    }

    #[test]
    fn test_json_document() {
        let entries = vec![entry(7, "2024-01-05", "22:00", "06:00", 8.0)];
        let bytes = Exporter::new(ExportFormat::Json).render(&entries, "January 2024").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["period"], "January 2024");
        assert_eq!(value["totalHours"], "8.00");
        assert_eq!(value["entries"][0]["id"], 7);
        assert_eq!(value["entries"][0]["startTime"], "22:00");
    }

    #[test]
    fn test_sheet_name_is_sanitized() {
        assert_eq!(sheet_name("January 2024"), "January 2024");
        assert_eq!(sheet_name("Q1: Jan/Feb"), "Q1- Jan-Feb");
        assert_eq!(sheet_name(""), "Sheet1");
        assert_eq!(sheet_name(&"x".repeat(40)).len(), 31);
    }

    #[test]
    fn test_default_file_name() {
        let period = Period::new(2024, 1).unwrap();
        assert_eq!(Exporter::new(ExportFormat::Excel).default_file_name(&period), "timesheet-January-2024.xlsx");
        assert_eq!(Exporter::new(ExportFormat::Csv).default_file_name(&period), "timesheet-January-2024.csv");
    }
}
