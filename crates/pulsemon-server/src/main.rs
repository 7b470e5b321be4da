//! pulsemon server
//!
//! - POST /update/{type}/{name}/{value}
//! - GET  /value/{type}/{name}
//! - GET  /            (plain-text listing)
//! - GET  /healthz

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

use pulsemon_core::error::{MetricsError, Result};
use pulsemon_server::{app_state, config, router};

const CONFIG_ENV: &str = "PULSEMON_SERVER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "pulsemon-server.yaml";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "pulsemon-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new();
    let app = router::build_router(state);

    tracing::info!(%listen, "pulsemon-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MetricsError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MetricsError::Internal(format!("server failed: {e}")))
}
