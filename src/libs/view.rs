//! What the client gets to see.
//!
//! The web pages are rendered from [`DashView`] and [`LoginView`]; the
//! command line prints tables through [`View`].

use crate::db::users::User;
use crate::libs::messages::Message;
use crate::libs::pagination::Page;
use crate::libs::task::{SubTask, Task};
use prettytable::{row, Table};
use serde::Serialize;
use std::str::FromStr;

/// The selected task together with the people it is shared with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub assignees: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashView {
    pub user: String,
    pub tasks: Vec<Task>,
    pub task: Option<TaskView>,
    pub subtasks: Option<Page<SubTask>>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginView {
    pub error_message: Option<String>,
}

impl LoginView {
    /// Builds the view from the `error` query parameter; unknown codes show no message.
    pub fn from_code(code: Option<&str>) -> Self {
        Self {
            error_message: code.and_then(|code| code.parse::<LoginFailure>().ok()).map(|failure| failure.message().to_string()),
        }
    }
}

/// Why a login form was bounced back, carried in the redirect's query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    NameTaken,
    InvalidCredentials,
    InvalidInput,
}

impl LoginFailure {
    pub fn code(self) -> &'static str {
        match self {
            LoginFailure::NameTaken => "name_taken",
            LoginFailure::InvalidCredentials => "invalid_credentials",
            LoginFailure::InvalidInput => "invalid_input",
        }
    }

    pub fn message(self) -> Message {
        match self {
            LoginFailure::NameTaken => Message::NameTaken,
            LoginFailure::InvalidCredentials => Message::InvalidCredentials,
            LoginFailure::InvalidInput => Message::InvalidLoginInput,
        }
    }
}

impl FromStr for LoginFailure {
    type Err = ();

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "name_taken" => Ok(LoginFailure::NameTaken),
            "invalid_credentials" => Ok(LoginFailure::InvalidCredentials),
            "invalid_input" => Ok(LoginFailure::InvalidInput),
            _ => Err(()),
        }
    }
}

pub struct View {}

impl View {
    pub fn users(users: &[User]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "REGISTERED"]);
        for user in users {
            table.add_row(row![user.id, user.name, user.created_at.format("%Y-%m-%d %H:%M")]);
        }
        table.printstd();
    }

    /// Tasks with the number of subtasks each one holds.
    pub fn tasks(tasks: &[(Task, u64)]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "SUBTASKS", "CREATED"]);
        for (task, subtasks) in tasks {
            table.add_row(row![task.id, task.title, subtasks, task.created_at.format("%Y-%m-%d %H:%M")]);
        }
        table.printstd();
    }
}
