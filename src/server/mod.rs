//! HTTP surface of sharelist.
//!
//! ```text
//! GET/POST /         login page
//! GET/POST /error    login page with an error message
//! POST     /login    sign in or register
//! GET/POST /logout   end the session
//! GET/POST /dash     task dashboard
//! ```
//!
//! Store work runs on blocking workers, each with its own SQLite connection;
//! see [`state::AppState::with_db`].

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use state::AppState;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// Serves the application until Ctrl+C or SIGTERM.
pub async fn start_server(state: AppState, address: &str) -> Result<()> {
    let app = routes::create_router(state);

    let listener = TcpListener::bind(address).await?;
    msg_success!(Message::ServerListening(address.to_string()));

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => msg_info!(Message::ServerReceivedCtrlC),
            Err(err) => {
                msg_error!(Message::SignalHandlerFailed(err.to_string()));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                msg_info!(Message::ServerReceivedTerminate);
            }
            Err(err) => {
                msg_error!(Message::SignalHandlerFailed(err.to_string()));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    msg_info!(Message::ServerShuttingDown);
}
