//! HTTP API over the time entry store.
//!
//! A small JSON service: create, read, update and delete entries, list a
//! month, and download a month as an xlsx timesheet. The store is created
//! once at startup and shared through [`AppState`]; there is no global
//! connection.
//!
//! ## Routes
//!
//! - `GET /` and `GET /api/health`: liveness
//! - `GET|POST /api/time-entries`
//! - `PUT|DELETE /api/time-entries/{id}`
//! - `GET /api/time-entries/month/{year}/{month}`
//! - `GET /api/time-entries/export/{year}/{month}`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::api::{self, AppState};
//! use shiftlog::db::entries::Entries;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let state = AppState::new(Entries::new()?);
//! api::serve("127.0.0.1:5000".parse()?, state).await?;
//! # Ok(())
//! # }
//! ```

use crate::db::entries::Entries;
use crate::libs::messages::Message;
use crate::{msg_info, msg_warning};
use anyhow::Result;
use axum::{
    routing::{get, put},
    Router,
};
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

/// Shared handles for the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<Mutex<Entries>>,
}

impl AppState {
    pub fn new(entries: Entries) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/time-entries", get(handlers::list_entries).post(handlers::create_entry))
        .route("/api/time-entries/{id}", put(handlers::update_entry).delete(handlers::delete_entry))
        .route("/api/time-entries/month/{year}/{month}", get(handlers::month_entries))
        .route("/api/time-entries/export/{year}/{month}", get(handlers::export_month))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves the API until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    msg_info!(Message::ServerStarting(addr.to_string()));
    if !addr.ip().is_loopback() {
        msg_warning!(Message::ServerExposed(addr.to_string()));
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    msg_info!(Message::ServerListening(local_addr.to_string()));

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
