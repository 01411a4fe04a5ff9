use crate::libs::error::{constraint_violation, AppError, Constraint};
use crate::libs::messages::Message;
use crate::libs::password;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use uuid::Uuid;

pub const USER_NAME_MAX: usize = 50;

const INSERT_USER: &str = "INSERT INTO users (name, password) VALUES (?1, ?2)";
const SELECT_USER_BY_ID: &str = "SELECT id, name, password, created_at FROM users WHERE id = ?1";
const SELECT_USER_BY_NAME: &str = "SELECT id, name, password, created_at FROM users WHERE name = ?1";
const SELECT_ALL_USERS: &str = "SELECT id, name, password, created_at FROM users ORDER BY name";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Encoded argon2 hash, never the plaintext.
    #[serde(skip)]
    pub password: String,
    pub created_at: NaiveDateTime,
}

impl User {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            password: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

pub struct Users<'a> {
    conn: &'a Connection,
}

impl<'a> Users<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Registers an account. The name must be unused.
    pub fn create(&self, name: &str, password: &str) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > USER_NAME_MAX {
            return Err(AppError::Validation(Message::InvalidUserName));
        }
        if password.is_empty() {
            return Err(AppError::Validation(Message::InvalidPassword));
        }

        let hash = password::hash(password)?;
        match self.conn.execute(INSERT_USER, params![name, hash]) {
            Ok(_) => {}
            Err(err) if constraint_violation(&err) == Some(Constraint::Unique) => return Err(AppError::Conflict(Message::NameTaken)),
            Err(err) => return Err(err.into()),
        }

        self.get_by_id(self.conn.last_insert_rowid())?
            .ok_or_else(|| AppError::NotFound(Message::UserNotFound(name.to_string())))
    }

    /// Checks the credentials; unknown names and wrong passwords fail alike.
    pub fn authenticate(&self, name: &str, password: &str) -> Result<User, AppError> {
        let user = self.get_by_name(name.trim())?.ok_or(AppError::Auth)?;
        if password::verify(&user.password, password)? {
            Ok(user)
        } else {
            Err(AppError::Auth)
        }
    }

    /// Returns the named account, creating it with an unguessable password if missing.
    pub fn ensure(&self, name: &str) -> Result<User, AppError> {
        match self.get_by_name(name)? {
            Some(user) => Ok(user),
            None => self.create(name, &Uuid::new_v4().to_string()),
        }
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.conn.query_row(SELECT_USER_BY_ID, params![id], User::from_row).optional()?)
    }

    pub fn get_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        Ok(self.conn.query_row(SELECT_USER_BY_NAME, params![name], User::from_row).optional()?)
    }

    pub fn list(&self) -> Result<Vec<User>, AppError> {
        let mut stmt = self.conn.prepare(SELECT_ALL_USERS)?;
        let users = stmt.query_map([], User::from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }
}
