//! Runs the web application.

use crate::db::db::Db;
use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::server::start_server;
use crate::server::state::AppState;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Account used for every visitor in solo mode.
pub const SOLO_USER_NAME: &str = "local";

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Single-user mode against its own database, no login required
    #[arg(long)]
    solo: bool,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?.with_env_overrides();

    let mut server = config.server_settings();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    msg_print!(Message::ServerStarting(format!("{} {}", APP_METADATA_NAME, APP_METADATA_VERSION)));

    let db_path = config.database_path(args.solo)?;
    let db = Db::new(&db_path)?;
    msg_info!(Message::DbOpened(db_path.display().to_string()));

    let mut state = AppState::new(db_path.clone(), config.session_settings());
    if args.solo {
        let user = Users::new(&db.conn).ensure(SOLO_USER_NAME)?;
        state = state.with_solo_user(&user);
        msg_info!(Message::SoloModeEnabled(db_path.display().to_string()));
    }
    drop(db);

    start_server(state, &format!("{}:{}", server.host, server.port)).await
}
