//! Strict YAML config loading shared by the server and the agent.
//!
//! Documents are parsed with serde (callers use `deny_unknown_fields`) and
//! then validated; both failures surface as `MetricsError::Config` or the
//! document's own validation error.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{MetricsError, Result};

/// A config document that checks its own values after parsing.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn load_from_file<T: DeserializeOwned + Validate>(path: &str) -> Result<T> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetricsError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str<T: DeserializeOwned + Validate>(s: &str) -> Result<T> {
    let cfg: T = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to `T::default()`.
pub fn load_or_default<T: DeserializeOwned + Validate + Default>(path: &str) -> Result<T> {
    if Path::new(path).exists() {
        return load_from_file(path);
    }
    tracing::info!(path, "config file not found, using defaults");
    Ok(T::default())
}
