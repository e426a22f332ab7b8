use super::entry::TimeEntry;
use super::formatter::{format_hours, format_hours_hm};
use super::hours::round_hours;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn entries(entries: &[TimeEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "DAY", "SITE", "START", "END", "HOURS", "HH:MM"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.date.format("%Y-%m-%d"),
                entry.day,
                entry.site_location,
                entry.start_time,
                entry.end_time,
                format_hours(entry.total_hours),
                format_hours_hm(entry.total_hours)
            ]);
        }

        let total = Self::total_hours(entries);
        table.add_row(row!["", "", "", "", "", "TOTAL", format_hours(total), format_hours_hm(total)]);
        table.printstd();

        Ok(())
    }

    pub fn entry(entry: &TimeEntry) -> Result<()> {
        Self::entries(std::slice::from_ref(entry))
    }

    pub fn total_hours(entries: &[TimeEntry]) -> f64 {
        round_hours(entries.iter().fold(0.0, |total, e| total + e.total_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_total_is_unsigned_zero() {
        let total = View::total_hours(&[]);

        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
        assert_eq!(format_hours(total), "0.00");
    }
}
