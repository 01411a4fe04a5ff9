use crate::server::handlers::{dash, login};
use crate::server::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(login::index).post(login::index))
        .route("/error", get(login::index).post(login::index))
        .route("/login", post(login::login))
        .route("/logout", get(login::logout).post(login::logout))
        .route("/dash", get(dash::show).post(dash::dispatch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
