use crate::{
    api::{self, AppState},
    db::entries::Entries,
    libs::config::Config,
    libs::messages::Message,
    msg_error_anyhow,
};
use anyhow::Result;
use clap::Args;
use std::net::SocketAddr;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the configured one and `PORT`
    #[arg(short, long)]
    bind: Option<String>,
}

pub async fn cmd(serve_args: ServeArgs) -> Result<()> {
    let config = Config::load()?;
    let addr: SocketAddr = match serve_args.bind {
        Some(bind) => bind.parse().map_err(|_| msg_error_anyhow!(Message::InvalidBindAddress(bind)))?,
        None => config.bind_addr()?,
    };

    let state = AppState::new(Entries::new()?);
    api::serve(addr, state).await
}
