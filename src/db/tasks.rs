use crate::db::users::{User, Users};
use crate::libs::error::{constraint_violation, AppError, Constraint};
use crate::libs::messages::Message;
use crate::libs::task::{validate_title, Task, TASK_TITLE_MAX};
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, creator) VALUES (?1, ?2)";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, creator, created_at FROM tasks WHERE id = ?1";
const SELECT_TASKS_FOR_USER: &str = "
    SELECT DISTINCT t.id, t.title, t.creator, t.created_at FROM tasks t
    LEFT JOIN assignees a ON a.task_id = t.id
    WHERE t.creator = ?1 OR a.user_id = ?1
    ORDER BY t.created_at, t.id
";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_TASK_SUBTASKS: &str = "DELETE FROM subtasks WHERE task_id = ?1";
const DELETE_TASK_ASSIGNEES: &str = "DELETE FROM assignees WHERE task_id = ?1";
const INSERT_ASSIGNEE: &str = "INSERT OR IGNORE INTO assignees (user_id, task_id) VALUES (?1, ?2)";
const SELECT_IS_ASSIGNED: &str = "
    SELECT EXISTS(
        SELECT 1 FROM tasks t
        LEFT JOIN assignees a ON a.task_id = t.id
        WHERE t.id = ?1 AND (t.creator = ?2 OR a.user_id = ?2)
    )
";
const SELECT_ASSIGNEES: &str = "
    SELECT u.id, u.name, u.password, u.created_at FROM users u
    JOIN assignees a ON a.user_id = u.id
    WHERE a.task_id = ?1
    ORDER BY u.name
";

impl Task {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            creator: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Tasks the user created or was given, oldest first.
    pub fn list_for_user(&self, user_id: i64) -> Result<Vec<Task>, AppError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_FOR_USER)?;
        let tasks = stmt.query_map(params![user_id], Task::from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Creates a task and assigns it to its creator in one transaction.
    pub fn create(&self, creator: i64, title: &str) -> Result<Task, AppError> {
        let title = title.trim();
        validate_title(title, TASK_TITLE_MAX)?;

        let tx = self.conn.unchecked_transaction()?;
        match tx.execute(INSERT_TASK, params![title, creator]) {
            Ok(_) => {}
            Err(err) => {
                return Err(match constraint_violation(&err) {
                    Some(Constraint::Unique) => AppError::Conflict(Message::TaskAlreadyExists),
                    Some(Constraint::ForeignKey) => AppError::NotFound(Message::UserNotFound(creator.to_string())),
                    _ => err.into(),
                })
            }
        }
        let id = tx.last_insert_rowid();
        tx.execute(INSERT_ASSIGNEE, params![creator, id])?;
        let task = tx.query_row(SELECT_TASK_BY_ID, params![id], Task::from_row)?;
        tx.commit()?;

        Ok(task)
    }

    /// Removes the task with its subtasks and assignee links. Missing tasks are ignored.
    pub fn delete(&self, task_id: i64) -> Result<(), AppError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(DELETE_TASK_SUBTASKS, params![task_id])?;
        tx.execute(DELETE_TASK_ASSIGNEES, params![task_id])?;
        tx.execute(DELETE_TASK, params![task_id])?;
        tx.commit()?;
        Ok(())
    }

    /// Shares the task with the named user. Adding someone twice changes nothing.
    pub fn add_assignee(&self, task_id: i64, user_name: &str) -> Result<User, AppError> {
        let user = Users::new(self.conn)
            .get_by_name(user_name.trim())?
            .ok_or(AppError::NotFound(Message::AssigneeNotFound))?;

        match self.conn.execute(INSERT_ASSIGNEE, params![user.id, task_id]) {
            Ok(_) => Ok(user),
            Err(err) if constraint_violation(&err) == Some(Constraint::ForeignKey) => Err(AppError::NotFound(Message::TaskNotFound(task_id))),
            Err(err) => Err(err.into()),
        }
    }

    pub fn get(&self, task_id: i64) -> Result<Option<Task>, AppError> {
        Ok(self.conn.query_row(SELECT_TASK_BY_ID, params![task_id], Task::from_row).optional()?)
    }

    /// Whether the user may see the task, as creator or assignee.
    pub fn is_assigned(&self, task_id: i64, user_id: i64) -> Result<bool, AppError> {
        Ok(self.conn.query_row(SELECT_IS_ASSIGNED, params![task_id, user_id], |row| row.get(0))?)
    }

    pub fn assignees(&self, task_id: i64) -> Result<Vec<User>, AppError> {
        let mut stmt = self.conn.prepare(SELECT_ASSIGNEES)?;
        let users = stmt.query_map(params![task_id], User::from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }
}
