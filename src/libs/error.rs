//! Error taxonomy for request handling.
//!
//! Every store operation returns [`AppError`]. The first four variants are
//! expected outcomes of user input and are turned into a message on the same
//! page; [`AppError::Database`] and [`AppError::Internal`] are real failures
//! and surface as a server error once the transaction has been rolled back.

use crate::libs::messages::Message;
use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input: empty or oversized title, malformed form field.
    #[error("{0}")]
    Validation(Message),

    /// Unique constraint violation (task title, user name).
    #[error("{0}")]
    Conflict(Message),

    /// Referenced user, task or subtask is absent or not visible to the caller.
    #[error("{0}")]
    NotFound(Message),

    /// Bad credentials.
    #[error("{}", Message::InvalidCredentials)]
    Auth,

    #[error("{}: {}", Message::DbQueryFailed, .0)]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Internal(Message),
}

impl AppError {
    /// Whether the error should be shown to the user instead of failing the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Conflict(_) | Self::NotFound(_) | Self::Auth)
    }
}

/// Constraint that rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Unique,
    ForeignKey,
    Other,
}

/// Classifies a constraint violation, `None` for any other database error.
pub fn constraint_violation(error: &rusqlite::Error) -> Option<Constraint> {
    match error {
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::ConstraintViolation => Some(match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Constraint::Unique,
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Constraint::ForeignKey,
            _ => Constraint::Other,
        }),
        _ => None,
    }
}
