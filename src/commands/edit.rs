//! Replaces an entry's inputs and recomputes its derived fields.

use crate::{
    db::entries::Entries,
    libs::{config::Config, entry::{normalize, NewEntry}, messages::Message, view::View},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Entry id as shown by `list`
    id: i64,
    /// Shift date, `YYYY-MM-DD`
    date: String,
    /// Start time, `HH:MM`
    start: String,
    /// End time, `HH:MM`
    end: String,
    /// Site location; the configured default site when omitted
    #[arg(short, long)]
    site: Option<String>,
}

pub fn cmd(edit_args: EditArgs) -> Result<()> {
    let site = Config::read()?.site_or_default(edit_args.site);
    let raw = NewEntry::new(&edit_args.date, &edit_args.start, &edit_args.end, Some(&site));
    let fields = normalize(&raw)?;

    let Some(entry) = Entries::new()?.update(edit_args.id, &fields)? else {
        msg_bail_anyhow!(Message::EntryNotFound(edit_args.id));
    };

    msg_success!(Message::EntryUpdated(entry.id, entry.date.to_string()));
    View::entry(&entry)
}
