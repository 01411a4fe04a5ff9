use crate::db::db::Db;
use crate::db::users::User;
use crate::libs::config::SessionConfig;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;

/// Account every visitor is signed in as when running solo.
#[derive(Debug, Clone)]
pub struct SoloUser {
    pub id: i64,
    pub name: String,
}

#[derive(Clone)]
pub struct AppState {
    pub db_path: Arc<PathBuf>,
    pub sessions: Arc<SessionStore>,
    pub session: Arc<SessionConfig>,
    pub solo_user: Option<SoloUser>,
}

impl AppState {
    pub fn new(db_path: PathBuf, session: SessionConfig) -> Self {
        Self {
            db_path: Arc::new(db_path),
            sessions: Arc::new(SessionStore::new(session.max_age)),
            session: Arc::new(session),
            solo_user: None,
        }
    }

    pub fn with_solo_user(mut self, user: &User) -> Self {
        self.solo_user = Some(SoloUser {
            id: user.id,
            name: user.name.clone(),
        });
        self
    }

    /// Runs `work` on a blocking worker with a connection of its own.
    pub async fn with_db<F, T>(&self, work: F) -> Result<T, AppError>
    where
        F: FnOnce(&Connection) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.db_path);
        tokio::task::spawn_blocking(move || {
            let db = Db::open(path.as_path())?;
            work(&db.conn)
        })
        .await
        .map_err(|err| AppError::Internal(Message::WorkerFailed(err.to_string())))?
    }
}
