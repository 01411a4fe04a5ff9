//! Server-side sessions keyed by the id carried in the session cookie.
//!
//! Each session owns its dashboard [`Selection`], so what one user has
//! selected never leaks into another user's view.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Task and subtask page the dashboard is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub task_id: Option<i64>,
    pub page: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self { task_id: None, page: 1 }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub user_name: String,
    pub selection: Selection,
    pub created_at: DateTime<Utc>,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    max_age: Duration,
}

impl SessionStore {
    pub fn new(max_age_secs: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_age: i64::try_from(max_age_secs).ok().and_then(Duration::try_seconds).unwrap_or(Duration::MAX),
        }
    }

    /// Opens a session for the user and returns its id.
    pub fn start(&self, user_id: i64, user_name: &str) -> Uuid {
        self.open(user_id, user_name).0
    }

    /// Opens a session for the user and returns it along with its id.
    ///
    /// Expired sessions are dropped before the new one is stored.
    pub fn open(&self, user_id: i64, user_name: &str) -> (Uuid, Session) {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let session = Session {
            user_id,
            user_name: user_name.to_string(),
            selection: Selection::default(),
            created_at: now,
        };

        let mut sessions = self.sessions.write();
        sessions.retain(|_, existing| !self.is_expired(existing, now));
        sessions.insert(id, session.clone());
        (id, session)
    }

    /// Returns a copy of the session, dropping it if it has expired.
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        let session = self.sessions.read().get(id).cloned()?;
        if self.is_expired(&session, Utc::now()) {
            self.end(id);
            return None;
        }
        Some(session)
    }

    pub fn set_selection(&self, id: &Uuid, selection: Selection) {
        if let Some(session) = self.sessions.write().get_mut(id) {
            session.selection = selection;
        }
    }

    pub fn end(&self, id: &Uuid) -> Option<Session> {
        self.sessions.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.created_at > self.max_age
    }
}
