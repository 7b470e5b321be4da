//! Agent config loader (strict parsing).

pub mod schema;

use pulsemon_core::config;
use pulsemon_core::error::Result;

pub use schema::{AgentConfig, AgentSection};

pub fn load_from_file(path: &str) -> Result<AgentConfig> {
    config::load_from_file(path)
}

pub fn load_from_str(s: &str) -> Result<AgentConfig> {
    config::load_from_str(s)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: &str) -> Result<AgentConfig> {
    config::load_or_default(path)
}
