use std::time::Duration;

use pulsemon_core::config::Validate;
use pulsemon_core::error::{MetricsError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub agent: AgentSection,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            version: 1,
            agent: AgentSection::default(),
        }
    }
}

impl Validate for AgentConfig {
    fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }
        self.agent.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSection {
    /// Server `host:port`, or a full `http://` base URL.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64,

    /// Upper bound on a single outbound update call.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            server: default_server(),
            poll_interval_ms: default_poll_interval_ms(),
            report_interval_ms: default_report_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl AgentSection {
    pub fn validate(&self) -> Result<()> {
        if self.server.trim().is_empty() {
            return Err(MetricsError::Config("agent.server must not be empty".into()));
        }
        if self.poll_interval_ms == 0 {
            return Err(MetricsError::Config("agent.poll_interval_ms must be > 0".into()));
        }
        if self.report_interval_ms == 0 {
            return Err(MetricsError::Config("agent.report_interval_ms must be > 0".into()));
        }
        if self.request_timeout_ms == 0 {
            return Err(MetricsError::Config("agent.request_timeout_ms must be > 0".into()));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn report_interval(&self) -> Duration {
        Duration::from_millis(self.report_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_server() -> String {
    "localhost:8080".into()
}
fn default_poll_interval_ms() -> u64 {
    2000
}
fn default_report_interval_ms() -> u64 {
    10000
}
fn default_request_timeout_ms() -> u64 {
    5000
}
