use crate::{
    db::entries::Entries,
    libs::messages::Message,
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entry id as shown by `list`
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let mut entries = Entries::new()?;

    let Some(entry) = entries.fetch(delete_args.id)? else {
        msg_bail_anyhow!(Message::EntryNotFound(delete_args.id));
    };

    if !delete_args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(entry.id, entry.date.to_string()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    entries.delete(entry.id)?;
    msg_success!(Message::EntryDeleted(entry.id));
    Ok(())
}
