use crate::libs::error::{constraint_violation, AppError, Constraint};
use crate::libs::messages::Message;
use crate::libs::pagination::{clamp_page, offset, page_count, Page};
use crate::libs::task::{validate_title, SubTask, SubTaskStatus, SUBTASK_TITLE_MAX};
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_SUBTASK: &str = "INSERT INTO subtasks (title, status, task_id) VALUES (?1, ?2, ?3)";
const UPDATE_SUBTASK: &str = "UPDATE subtasks SET title = ?2, status = ?3 WHERE id = ?1";
const DELETE_SUBTASK: &str = "DELETE FROM subtasks WHERE id = ?1";
const SELECT_SUBTASK_BY_ID: &str = "SELECT id, title, status, task_id, created_at FROM subtasks WHERE id = ?1";
const SELECT_SUBTASK_PAGE: &str = "
    SELECT id, title, status, task_id, created_at FROM subtasks
    WHERE task_id = ?1
    ORDER BY created_at, id
    LIMIT ?2 OFFSET ?3
";
const COUNT_SUBTASKS: &str = "SELECT COUNT(*) FROM subtasks WHERE task_id = ?1";

impl SubTask {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            status: row.get(2)?,
            task_id: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

pub struct SubTasks<'a> {
    conn: &'a Connection,
}

impl<'a> SubTasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// One page of the task's subtasks in creation order.
    ///
    /// A page past the end comes back empty.
    pub fn list(&self, task_id: i64, page: u32, per_page: u32) -> Result<Page<SubTask>, AppError> {
        let page = clamp_page(page);
        let total = self.count(task_id)?;

        let mut stmt = self.conn.prepare(SELECT_SUBTASK_PAGE)?;
        let items = stmt
            .query_map(params![task_id, per_page, offset(page, per_page) as i64], SubTask::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, per_page, total))
    }

    /// Adds an open subtask to an existing task.
    pub fn create(&self, task_id: i64, title: &str) -> Result<SubTask, AppError> {
        let title = title.trim();
        validate_title(title, SUBTASK_TITLE_MAX)?;

        match self.conn.execute(INSERT_SUBTASK, params![title, SubTaskStatus::Open, task_id]) {
            Ok(_) => {}
            Err(err) if constraint_violation(&err) == Some(Constraint::ForeignKey) => return Err(AppError::NotFound(Message::TaskNotFound(task_id))),
            Err(err) => return Err(err.into()),
        }

        let id = self.conn.last_insert_rowid();
        self.get(id)?.ok_or(AppError::NotFound(Message::SubtaskNotFound(id)))
    }

    /// Removes the subtask; a missing row is not an error.
    pub fn delete(&self, subtask_id: i64) -> Result<(), AppError> {
        self.conn.execute(DELETE_SUBTASK, params![subtask_id])?;
        Ok(())
    }

    /// Replaces title and status in one statement and returns the number of rows changed.
    pub fn edit(&self, subtask_id: i64, title: &str, status: SubTaskStatus) -> Result<usize, AppError> {
        let title = title.trim();
        validate_title(title, SUBTASK_TITLE_MAX)?;

        Ok(self.conn.execute(UPDATE_SUBTASK, params![subtask_id, title, status])?)
    }

    pub fn get(&self, subtask_id: i64) -> Result<Option<SubTask>, AppError> {
        Ok(self.conn.query_row(SELECT_SUBTASK_BY_ID, params![subtask_id], SubTask::from_row).optional()?)
    }

    pub fn count(&self, task_id: i64) -> Result<u64, AppError> {
        let count: i64 = self.conn.query_row(COUNT_SUBTASKS, params![task_id], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Page holding the most recent subtask, 1 when the task has none.
    pub fn last_page(&self, task_id: i64, per_page: u32) -> Result<u32, AppError> {
        Ok(clamp_page(page_count(self.count(task_id)?, per_page)))
    }
}
