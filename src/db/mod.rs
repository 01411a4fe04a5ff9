//! SQLite persistence for sharelist.
//!
//! The stores borrow a [`rusqlite::Connection`] for the span of one unit of
//! work, so a request handler opens a connection, runs a few store calls and
//! drops it again. Multi-statement operations run in a transaction.
//!
//! ```rust,no_run
//! use sharelist::db::{db::Db, tasks::Tasks, users::Users};
//!
//! let db = Db::new("sharelist.db")?;
//! let alice = Users::new(&db.conn).create("alice", "secret")?;
//! let task = Tasks::new(&db.conn).create(alice.id, "groceries")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup and database file locations.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// Subtasks and their paging.
pub mod subtasks;

/// Tasks and task sharing.
pub mod tasks;

/// Accounts and credential checks.
pub mod users;
