use crate::libs::dashboard::{Dashboard, Outcome};
use crate::libs::error::AppError;
use crate::server::auth::CurrentSession;
use crate::server::state::AppState;
use axum::extract::State;
use axum::response::{Redirect, Response};
use axum::{Form, Json};
use std::collections::HashMap;

pub async fn show(State(state): State<AppState>, current: CurrentSession) -> Result<Response, AppError> {
    let (user_id, user_name) = (current.session.user_id, current.session.user_name.clone());
    let (view, selection) = state.with_db(move |conn| Dashboard::new(conn, user_id, &user_name).open()).await?;

    state.sessions.set_selection(&current.id, selection);
    Ok(current.attach(&state, Json(view)))
}

pub async fn dispatch(
    State(state): State<AppState>,
    current: CurrentSession,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let (user_id, user_name) = (current.session.user_id, current.session.user_name.clone());
    let selection = current.session.selection;
    let (outcome, selection) = state
        .with_db(move |conn| Dashboard::new(conn, user_id, &user_name).handle_form(selection, &fields))
        .await?;

    state.sessions.set_selection(&current.id, selection);
    Ok(match outcome {
        Outcome::Render(view) => current.attach(&state, Json(view)),
        Outcome::Redirect => current.attach(&state, Redirect::to("/dash")),
    })
}
