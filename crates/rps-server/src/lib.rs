//! RPS Server
//!
//! HTTP dispatcher for the adaptive rock-paper-scissors opponent: maps the
//! session header to a session, plays rounds, and on stop merges the player's
//! rank among all finished sessions into the summary.

pub mod config;
mod error;
mod handlers;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;

pub use config::ServerConfig;
pub use error::AppError;
pub use handlers::SESSION_HEADER;
pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/play/:move_name", post(handlers::play))
        .route("/stop", put(handlers::stop))
        .route("/api/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Periodically drop sessions idle for longer than `max_idle`
pub fn spawn_idle_sweeper(
    state: AppState,
    every: Duration,
    max_idle: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let evicted = state.evict_idle(max_idle);
            if !evicted.is_empty() {
                tracing::info!("Evicted {} idle sessions", evicted.len());
            }
        }
    })
}
