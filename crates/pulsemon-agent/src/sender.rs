//! Outbound metric delivery.
//!
//! `MetricSender` is the seam the reporter pushes through; production uses
//! `HttpSender`, tests inject their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};

use pulsemon_core::error::{MetricsError, Result};
use pulsemon_core::wire::update_path;
use pulsemon_core::MetricKind;

#[async_trait]
pub trait MetricSender: Send + Sync {
    /// Deliver one already-encoded value. Anything short of an
    /// acknowledged update is a `Transport` error.
    async fn send(&self, kind: MetricKind, name: &str, value: &str) -> Result<()>;
}

/// `POST http://<server>/update/{kind}/{name}/{value}` with an empty
/// `text/plain` body; only HTTP 200 counts as success.
pub struct HttpSender {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSender {
    /// `server` is `host:port` or a full `http://host:port` base URL.
    pub fn new(server: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MetricsError::Transport(format!("http client build failed: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url(server),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn base_url(server: &str) -> String {
    let s = server.trim_end_matches('/');
    if s.contains("://") {
        s.to_string()
    } else {
        format!("http://{s}")
    }
}

#[async_trait]
impl MetricSender for HttpSender {
    async fn send(&self, kind: MetricKind, name: &str, value: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, update_path(kind, name, value));
        let res = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "text/plain")
            .send()
            .await
            .map_err(|e| MetricsError::Transport(format!("POST {url}: {e}")))?;

        if res.status() != StatusCode::OK {
            return Err(MetricsError::Transport(format!(
                "POST {url}: unexpected status {}",
                res.status()
            )));
        }
        Ok(())
    }
}
