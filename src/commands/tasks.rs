use super::DatabaseArgs;
use crate::db::{db::Db, subtasks::SubTasks, tasks::Tasks, users::Users};
use crate::libs::{messages::Message, view::View};
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Whose tasks to list
    user: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub fn cmd(args: TasksArgs) -> Result<()> {
    let db = Db::new(args.database.path()?)?;

    let Some(user) = Users::new(&db.conn).get_by_name(&args.user)? else {
        msg_bail_anyhow!(Message::UserNotFound(args.user));
    };

    let tasks = Tasks::new(&db.conn).list_for_user(user.id)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound(user.name));
        return Ok(());
    }

    let subtasks = SubTasks::new(&db.conn);
    let rows = tasks
        .into_iter()
        .map(|task| subtasks.count(task.id).map(|count| (task, count)))
        .collect::<Result<Vec<_>, _>>()?;

    msg_print!(Message::TasksHeader(user.name), true);
    View::tasks(&rows);
    Ok(())
}
