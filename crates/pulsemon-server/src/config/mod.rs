//! Server config loader (strict parsing).

pub mod schema;

use pulsemon_core::config;
use pulsemon_core::error::Result;

pub use schema::{ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    config::load_from_file(path)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    config::load_from_str(s)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    config::load_or_default(path)
}
