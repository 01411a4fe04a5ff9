//! Core library modules for sharelist.
//!
//! Everything below the HTTP layer lives here: the domain types, the
//! dashboard dispatcher, sessions, configuration and console messaging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sharelist::db::db::Db;
//! use sharelist::libs::dashboard::Dashboard;
//! use sharelist::libs::session::Selection;
//!
//! let db = Db::new("sharelist.db")?;
//! let dashboard = Dashboard::new(&db.conn, 1, "alice");
//! let view = dashboard.render(Selection::default(), None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod pagination;
pub mod password;
pub mod session;
pub mod task;
pub mod view;
