//! Interactive configuration setup.
//!
//! Walks through the database location, the API bind address and the
//! default site, then writes `config.json` to the data directory. Running it
//! again edits the existing values.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    #[arg(short, long)]
    defaults: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults { Config::default() } else { Config::init()? };

    config.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
