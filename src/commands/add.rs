//! Records a shift from the command line.

use crate::{
    db::entries::Entries,
    libs::{config::Config, entry::{normalize, NewEntry}, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Shift date, `YYYY-MM-DD`
    date: String,
    /// Start time, `HH:MM`
    start: String,
    /// End time, `HH:MM`; earlier than the start means the shift ends the next day
    end: String,
    /// Site location; the configured default site when omitted
    #[arg(short, long)]
    site: Option<String>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let site = Config::read()?.site_or_default(add_args.site);

    let fields = normalize(&NewEntry::new(&add_args.date, &add_args.start, &add_args.end, Some(&site)))?;
    let entry = Entries::new()?.insert(&fields)?;

    msg_success!(Message::EntryCreated(entry.id, entry.date.to_string()));
    View::entry(&entry)
}
