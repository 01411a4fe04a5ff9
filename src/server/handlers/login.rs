use crate::db::users::Users;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::view::{LoginFailure, LoginView};
use crate::msg_debug;
use crate::server::auth::{expired_cookie, session_cookie, CurrentSession};
use crate::server::state::AppState;
use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ErrorQuery {
    pub error: Option<String>,
}

/// Register or sign-in form. The submit button's name picks the action.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub signup: Option<String>,
    pub signin: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

pub async fn index(Query(query): Query<ErrorQuery>) -> Json<LoginView> {
    Json(LoginView::from_code(query.error.as_deref()))
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Result<Response, AppError> {
    if form.name.trim().is_empty() || form.password.is_empty() {
        return Ok(failure(LoginFailure::InvalidInput));
    }

    let register = form.signup.is_some();
    let LoginForm { name, password, .. } = form;
    let result = state
        .with_db(move |conn| {
            let users = Users::new(conn);
            if register {
                users.create(&name, &password)
            } else {
                users.authenticate(&name, &password)
            }
        })
        .await;

    let user = match result {
        Ok(user) => user,
        Err(AppError::Conflict(_)) => return Ok(failure(LoginFailure::NameTaken)),
        Err(AppError::Auth) => return Ok(failure(LoginFailure::InvalidCredentials)),
        Err(AppError::Validation(_)) => return Ok(failure(LoginFailure::InvalidInput)),
        Err(err) => return Err(err),
    };

    if register {
        msg_debug!(Message::UserRegistered(user.name.clone()));
    }
    msg_debug!(Message::UserLoggedIn(user.name.clone()));

    let id = state.sessions.start(user.id, &user.name);
    let cookie = session_cookie(&state.session.cookie_name, &id, state.session.max_age);
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/dash")).into_response())
}

pub async fn logout(State(state): State<AppState>, current: CurrentSession) -> Response {
    state.sessions.end(&current.id);
    msg_debug!(Message::UserLoggedOut(current.session.user_name));

    ([(SET_COOKIE, expired_cookie(&state.session.cookie_name))], Redirect::to("/")).into_response()
}

fn failure(reason: LoginFailure) -> Response {
    Redirect::to(&format!("/error?error={}", reason.code())).into_response()
}
