use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DB_FILE_NAME: &str = "sharelist.db";
pub const SOLO_DB_FILE_NAME: &str = "dashboard.db";

/// How long a writer waits for SQLite's lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and applies pending migrations.
    pub fn new(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Self::connect(path.as_ref())?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens an already migrated database for a single unit of work.
    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Db> {
        let conn = Self::connect(path.as_ref())?;

        Ok(Db { conn })
    }

    pub fn new_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        Ok(Self::connect(path.as_ref())?)
    }

    /// Default database location inside the application data directory.
    pub fn default_path(solo: bool) -> Result<PathBuf> {
        let file_name = if solo { SOLO_DB_FILE_NAME } else { DB_FILE_NAME };
        DataStorage::new().get_path(file_name)
    }

    fn connect(path: &Path) -> rusqlite::Result<Connection> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        // Foreign keys are off by default in SQLite and must be enabled per connection.
        conn.pragma_update(None, "foreign_keys", true)?;

        Ok(conn)
    }
}
