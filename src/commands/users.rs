use super::DatabaseArgs;
use crate::db::{db::Db, users::Users};
use crate::libs::{messages::Message, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub fn cmd(args: UsersArgs) -> Result<()> {
    let db = Db::new(args.database.path()?)?;
    let users = Users::new(&db.conn).list()?;

    if users.is_empty() {
        msg_info!(Message::NoUsersFound);
        return Ok(());
    }

    msg_print!(Message::UsersHeader, true);
    View::users(&users);
    Ok(())
}
