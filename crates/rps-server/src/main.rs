//! RPS Server
//!
//! Serves the adaptive rock-paper-scissors opponent over HTTP.

use rps_server::{create_router, spawn_idle_sweeper, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        "Idle sessions expire after {}s, swept every {}s",
        config.session_idle.as_secs(),
        config.sweep_interval.as_secs()
    );

    let state = AppState::new();
    spawn_idle_sweeper(state.clone(), config.sweep_interval, config.session_idle);

    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("RPS service listening on http://{}", addr);

    axum::serve(listener, app).await
}
