//! Session cookie handling and the login-required extractor.

use crate::libs::session::Session;
use crate::server::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use uuid::Uuid;

/// The caller's session. Extracting it from a request without a valid
/// session redirects to the login page, unless the server runs solo, in
/// which case a session for the built-in user is opened on the spot.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: Uuid,
    pub session: Session,
    /// Opened by this request; the response has to carry the cookie.
    pub fresh: bool,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(id) = session_id(&parts.headers, &state.session.cookie_name) {
            if let Some(session) = state.sessions.get(&id) {
                return Ok(Self { id, session, fresh: false });
            }
        }

        if let Some(user) = &state.solo_user {
            let (id, session) = state.sessions.open(user.id, &user.name);
            return Ok(Self { id, session, fresh: true });
        }

        Err(Redirect::to("/"))
    }
}

impl CurrentSession {
    /// Attaches the session cookie when the session was opened by this request.
    pub fn attach(&self, state: &AppState, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.fresh {
            if let Ok(value) = HeaderValue::from_str(&session_cookie(&state.session.cookie_name, &self.id, state.session.max_age)) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

/// Reads the session id from the request's cookies.
pub fn session_id(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(cookie_name: &str, id: &Uuid, max_age: u64) -> String {
    format!("{cookie_name}={id}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}")
}

pub fn expired_cookie(cookie_name: &str) -> String {
    format!("{cookie_name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
