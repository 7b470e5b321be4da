//! pulsemon agent
//!
//! Polls runtime statistics every `poll_interval_ms` and reports the whole
//! local snapshot to `agent.server` every `report_interval_ms`.

use std::env;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use pulsemon_agent::{config, Agent, HttpSender};
use pulsemon_core::error::Result;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const CONFIG_ENV: &str = "PULSEMON_AGENT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "pulsemon-agent.yaml";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "pulsemon-agent failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;

    let sender = HttpSender::new(&cfg.agent.server, cfg.agent.request_timeout())?;
    tracing::info!(
        server = sender.base_url(),
        poll_ms = cfg.agent.poll_interval_ms,
        report_ms = cfg.agent.report_interval_ms,
        "pulsemon-agent starting"
    );

    Agent::from_config(&cfg.agent, Arc::new(sender)).run().await;
    Ok(())
}
