//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `XArgs` struct and a
//! `cmd` function; [`Cli::menu`] parses the arguments and dispatches.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod hours;
pub mod init;
pub mod list;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record a shift", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Replace the times of a recorded shift", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a recorded shift", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show recorded shifts")]
    List(list::ListArgs),
    #[command(about = "Export a month's timesheet", arg_required_else_help = true)]
    Export(export::ExportArgs),
    #[command(about = "Calculate the length of a shift", arg_required_else_help = true)]
    Hours(hours::HoursArgs),
    #[command(about = "Run the HTTP API")]
    Serve(serve::ServeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Hours(args) => hours::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
        }
    }
}
