//! Form dispatch for the dashboard page.
//!
//! A dashboard form carries exactly one action, recognised by which field is
//! present. [`Dashboard::handle_form`] runs that action against the stores,
//! updates the caller's [`Selection`] and builds the next [`DashView`].
//! Input problems end up in the view's message; only database failures
//! escape as errors.

use crate::db::subtasks::SubTasks;
use crate::db::tasks::Tasks;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::pagination::clamp_page;
use crate::libs::session::Selection;
use crate::libs::task::{SubTaskStatus, SUBTASKS_PER_PAGE};
use crate::libs::view::{DashView, TaskView};
use crate::msg_debug;
use rusqlite::Connection;
use std::collections::HashMap;
use std::str::FromStr;

pub const FIELD_TASK_LIST: &str = "taskList";
pub const FIELD_PREV_PAGE: &str = "prevPage";
pub const FIELD_NEXT_PAGE: &str = "nextPage";
pub const FIELD_ADD_TASK: &str = "add_task";
pub const FIELD_REMOVE_TASK: &str = "remove_task";
pub const FIELD_ADD_SUBTASK: &str = "add_subTask";
pub const FIELD_REMOVE_SUBTASK: &str = "remove_subTask";
pub const FIELD_EDIT_SUBTASK: &str = "edit_subTask";
pub const FIELD_SUBTASK_ID: &str = "id_subTask";
pub const FIELD_SUBTASK_STATE: &str = "subTask_state";
pub const FIELD_ADD_ASSIGNEE: &str = "add_assignee";

#[derive(Debug, Clone, PartialEq)]
pub enum DashAction {
    SelectTask(i64),
    PrevPage(u32),
    NextPage(u32),
    AddTask(String),
    RemoveTask,
    AddSubTask(String),
    RemoveSubTask(i64),
    EditSubTask { id: i64, title: String, status: SubTaskStatus },
    AddAssignee(String),
    /// No recognised field: just show the page.
    Render,
}

impl DashAction {
    /// Picks the action from the submitted fields, checking them in a fixed order.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        if let Some(value) = fields.get(FIELD_TASK_LIST) {
            return Ok(DashAction::SelectTask(parse_field(FIELD_TASK_LIST, value)?));
        }
        if let Some(value) = fields.get(FIELD_PREV_PAGE) {
            return Ok(DashAction::PrevPage(parse_field(FIELD_PREV_PAGE, value)?));
        }
        if let Some(value) = fields.get(FIELD_NEXT_PAGE) {
            return Ok(DashAction::NextPage(parse_field(FIELD_NEXT_PAGE, value)?));
        }
        if let Some(title) = fields.get(FIELD_ADD_TASK) {
            return Ok(DashAction::AddTask(title.clone()));
        }
        if fields.contains_key(FIELD_REMOVE_TASK) {
            return Ok(DashAction::RemoveTask);
        }
        if let Some(title) = fields.get(FIELD_ADD_SUBTASK) {
            return Ok(DashAction::AddSubTask(title.clone()));
        }
        if fields.contains_key(FIELD_REMOVE_SUBTASK) {
            return Ok(DashAction::RemoveSubTask(parse_field(FIELD_SUBTASK_ID, required(fields, FIELD_SUBTASK_ID)?)?));
        }
        if let Some(title) = fields.get(FIELD_EDIT_SUBTASK) {
            return Ok(DashAction::EditSubTask {
                id: parse_field(FIELD_SUBTASK_ID, required(fields, FIELD_SUBTASK_ID)?)?,
                title: title.clone(),
                status: SubTaskStatus::from_str(required(fields, FIELD_SUBTASK_STATE)?)?,
            });
        }
        if let Some(name) = fields.get(FIELD_ADD_ASSIGNEE) {
            return Ok(DashAction::AddAssignee(name.clone()));
        }
        Ok(DashAction::Render)
    }
}

fn required<'f>(fields: &'f HashMap<String, String>, name: &str) -> Result<&'f str, AppError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| AppError::Validation(Message::MissingFormField(name.to_string())))
}

fn parse_field<T: FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value.trim().parse().map_err(|_| AppError::Validation(Message::InvalidFormField(name.to_string())))
}

/// What the handler should send back.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Render(DashView),
    /// Start over from a fresh dashboard.
    Redirect,
}

enum Applied {
    Show(Selection, Option<Message>),
    Restart,
}

pub struct Dashboard<'a> {
    conn: &'a Connection,
    user_id: i64,
    user_name: &'a str,
}

impl<'a> Dashboard<'a> {
    pub fn new(conn: &'a Connection, user_id: i64, user_name: &'a str) -> Self {
        Self { conn, user_id, user_name }
    }

    /// A plain visit clears the selection.
    pub fn open(&self) -> Result<(DashView, Selection), AppError> {
        let selection = Selection::default();
        Ok((self.render(selection, None)?, selection))
    }

    pub fn handle_form(&self, selection: Selection, fields: &HashMap<String, String>) -> Result<(Outcome, Selection), AppError> {
        let result = DashAction::from_form(fields).and_then(|action| self.apply(selection, action));

        match result {
            Ok(Applied::Restart) => Ok((Outcome::Redirect, Selection::default())),
            Ok(Applied::Show(next, message)) => Ok((Outcome::Render(self.render(next, message.map(|m| m.to_string()))?), next)),
            Err(err) if err.is_recoverable() => {
                tracing::debug!(user = self.user_name, error = %err, "dashboard action rejected");
                Ok((Outcome::Render(self.render(selection, Some(err.to_string()))?), selection))
            }
            Err(err) => Err(err),
        }
    }

    /// Runs one action and returns the selection to show next.
    fn apply(&self, selection: Selection, action: DashAction) -> Result<Applied, AppError> {
        let tasks = Tasks::new(self.conn);
        let subtasks = SubTasks::new(self.conn);

        let next = match action {
            DashAction::Render => selection,
            DashAction::SelectTask(task_id) => {
                self.ensure_visible(task_id)?;
                Selection { task_id: Some(task_id), page: 1 }
            }
            DashAction::PrevPage(page) | DashAction::NextPage(page) => Selection {
                page: clamp_page(page),
                ..selection
            },
            DashAction::AddTask(title) => {
                let task = tasks.create(self.user_id, &title)?;
                msg_debug!(Message::TaskCreated(task.title.clone()));
                Selection { task_id: Some(task.id), page: 1 }
            }
            DashAction::RemoveTask => {
                let task_id = self.selected_task(selection)?;
                tasks.delete(task_id)?;
                msg_debug!(Message::TaskDeleted(task_id));
                return Ok(Applied::Restart);
            }
            DashAction::AddSubTask(title) => {
                let task_id = self.selected_task(selection)?;
                subtasks.create(task_id, &title)?;
                Selection {
                    task_id: Some(task_id),
                    page: subtasks.last_page(task_id, SUBTASKS_PER_PAGE)?,
                }
            }
            DashAction::RemoveSubTask(subtask_id) => {
                if let Some(subtask) = subtasks.get(subtask_id)? {
                    self.ensure_subtask_visible(subtask.task_id, subtask_id)?;
                    subtasks.delete(subtask_id)?;
                }
                match selection.task_id {
                    Some(task_id) => Selection {
                        task_id: Some(task_id),
                        page: subtasks.last_page(task_id, SUBTASKS_PER_PAGE)?,
                    },
                    None => selection,
                }
            }
            DashAction::EditSubTask { id, title, status } => {
                if let Some(subtask) = subtasks.get(id)? {
                    self.ensure_subtask_visible(subtask.task_id, id)?;
                    subtasks.edit(id, &title, status)?;
                }
                selection
            }
            DashAction::AddAssignee(name) => {
                let task_id = self.selected_task(selection)?;
                tasks.add_assignee(task_id, &name)?;
                return Ok(Applied::Show(selection, Some(Message::AssigneeAdded)));
            }
        };

        Ok(Applied::Show(next, None))
    }

    /// The selected task, provided the caller may still see it.
    fn selected_task(&self, selection: Selection) -> Result<i64, AppError> {
        let task_id = selection.task_id.ok_or(AppError::Validation(Message::NoTaskSelected))?;
        self.ensure_visible(task_id)?;
        Ok(task_id)
    }

    fn ensure_visible(&self, task_id: i64) -> Result<(), AppError> {
        if Tasks::new(self.conn).is_assigned(task_id, self.user_id)? {
            Ok(())
        } else {
            Err(AppError::NotFound(Message::TaskNotFound(task_id)))
        }
    }

    fn ensure_subtask_visible(&self, task_id: i64, subtask_id: i64) -> Result<(), AppError> {
        if Tasks::new(self.conn).is_assigned(task_id, self.user_id)? {
            Ok(())
        } else {
            Err(AppError::NotFound(Message::SubtaskNotFound(subtask_id)))
        }
    }

    /// Builds the page for the given selection. A task the caller can no longer see is dropped.
    pub fn render(&self, selection: Selection, message: Option<String>) -> Result<DashView, AppError> {
        let tasks = Tasks::new(self.conn);
        let list = tasks.list_for_user(self.user_id)?;

        let mut task = None;
        let mut subtasks = None;
        if let Some(task_id) = selection.task_id {
            if let Some(selected) = list.iter().find(|t| t.id == task_id).cloned() {
                let assignees = tasks.assignees(task_id)?.into_iter().map(|user| user.name).collect();
                subtasks = Some(SubTasks::new(self.conn).list(task_id, selection.page, SUBTASKS_PER_PAGE)?);
                task = Some(TaskView { task: selected, assignees });
            }
        }

        Ok(DashView {
            user: self.user_name.to_string(),
            tasks: list,
            task,
            subtasks,
            message,
        })
    }
}
