use crate::{
    libs::{
        formatter::{format_hours, format_hours_hm},
        hours::compute_hours,
        messages::Message,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HoursArgs {
    /// Start time, `HH:MM`
    start: String,
    /// End time, `HH:MM`
    end: String,
}

/// Prints the length of a shift without storing anything.
pub fn cmd(hours_args: HoursArgs) -> Result<()> {
    let hours = compute_hours(&hours_args.start, &hours_args.end)?;

    msg_print!(Message::ShiftHours(
        hours_args.start,
        hours_args.end,
        format!("{} ({})", format_hours(hours), format_hours_hm(hours))
    ));
    Ok(())
}
