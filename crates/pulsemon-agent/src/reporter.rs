//! Report tick: push the local snapshot to the server.
//!
//! Best effort. The first failed send aborts the rest of the tick; nothing
//! is retried until the next tick.

use std::sync::Arc;

use pulsemon_core::error::Result;

use crate::metrics::LocalMetrics;
use crate::sender::MetricSender;

pub struct Reporter {
    metrics: Arc<LocalMetrics>,
    sender: Arc<dyn MetricSender>,
}

impl Reporter {
    pub fn new(metrics: Arc<LocalMetrics>, sender: Arc<dyn MetricSender>) -> Self {
        Self { metrics, sender }
    }

    /// Send every gauge then every counter. Returns how many were sent.
    pub async fn report_once(&self) -> Result<usize> {
        let entries = self.metrics.snapshot().wire_entries();
        let total = entries.len();

        for (sent, (kind, name, value)) in entries.into_iter().enumerate() {
            if let Err(e) = self.sender.send(kind, &name, &value).await {
                let skipped = total - sent - 1;
                tracing::debug!(%kind, %name, sent, skipped, "report tick aborted");
                return Err(e);
            }
        }

        tracing::debug!(sent = total, "report tick complete");
        Ok(total)
    }
}
