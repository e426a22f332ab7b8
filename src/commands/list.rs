//! Tabular listing of entries, optionally narrowed to a year or a month.
//!
//! Without filters every entry is shown newest first. With `--year` and/or
//! `--month` the store filter is used and entries come out in date order.

use crate::{
    db::entries::Entries,
    libs::{
        entry::{month_name, parse_month, EntryFilter},
        formatter::format_hours,
        messages::Message,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only entries of this year
    #[arg(short, long)]
    year: Option<i32>,
    /// Only entries of this month, by name or number
    #[arg(short, long)]
    month: Option<String>,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    let month = list_args.month.as_deref().map(parse_month).transpose()?;
    let filter = EntryFilter {
        year: list_args.year,
        month: month.map(|m| month_name(m).to_string()),
    };

    let mut store = Entries::new()?;
    let entries = if filter == EntryFilter::default() {
        store.fetch_all()?
    } else {
        store.query(&filter)?
    };

    let label = describe(&filter);
    if entries.is_empty() {
        msg_print!(Message::NoEntriesForPeriod(label));
        return Ok(());
    }

    msg_print!(Message::EntriesHeader(label), true);
    View::entries(&entries)?;
    msg_print!(Message::EntriesTotal(entries.len(), format_hours(View::total_hours(&entries))));
    Ok(())
}

fn describe(filter: &EntryFilter) -> String {
    match (&filter.month, filter.year) {
        (Some(month), Some(year)) => format!("{} {}", month, year),
        (Some(month), None) => month.clone(),
        (None, Some(year)) => year.to_string(),
        (None, None) => "all entries".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_filter() {
        let filter = EntryFilter {
            year: Some(2024),
            month: Some("March".to_string()),
        };

        assert_eq!(describe(&filter), "March 2024");
        assert_eq!(describe(&EntryFilter::default()), "all entries");
    }
}
