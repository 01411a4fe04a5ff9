use crate::libs::error::AppError;
use crate::libs::messages::Message;
use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const TASK_TITLE_MAX: usize = 20;
pub const SUBTASK_TITLE_MAX: usize = 25;
pub const SUBTASKS_PER_PAGE: u32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub creator: i64,
    pub created_at: NaiveDateTime,
}

/// Subtask completion flag, stored as an integer: `1` open, `0` done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubTaskStatus {
    #[default]
    Open,
    Done,
}

impl SubTaskStatus {
    pub fn flag(self) -> i64 {
        match self {
            SubTaskStatus::Open => 1,
            SubTaskStatus::Done => 0,
        }
    }

    pub fn from_flag(flag: i64) -> Self {
        if flag == 0 {
            SubTaskStatus::Done
        } else {
            SubTaskStatus::Open
        }
    }
}

impl FromStr for SubTaskStatus {
    type Err = AppError;

    /// Accepts the integer flag the form posts as well as the names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "open" => Ok(SubTaskStatus::Open),
            "0" | "done" => Ok(SubTaskStatus::Done),
            _ => Err(AppError::Validation(Message::InvalidSubtaskStatus(value.to_string()))),
        }
    }
}

impl ToSql for SubTaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.flag()))
    }
}

impl FromSql for SubTaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(SubTaskStatus::from_flag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubTask {
    pub id: i64,
    pub title: String,
    pub status: SubTaskStatus,
    pub task_id: i64,
    pub created_at: NaiveDateTime,
}

/// Rejects blank titles and titles longer than `max` characters.
pub fn validate_title(title: &str, max: usize) -> Result<(), AppError> {
    if title.trim().is_empty() || title.chars().count() > max {
        return Err(AppError::Validation(Message::InvalidTitle));
    }
    Ok(())
}
