//! Agent loop: two independent periodic tasks over one `LocalMetrics`.
//!
//! - poll task: `Collector::poll_once` every `poll_interval`
//! - report task: `Reporter::report_once` every `report_interval`
//!
//! Both first fire one full period after start. There is no shutdown path
//! other than process exit.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::collector::Collector;
use crate::config::AgentSection;
use crate::metrics::LocalMetrics;
use crate::reporter::Reporter;
use crate::sender::MetricSender;

pub struct Agent {
    collector: Arc<Collector>,
    reporter: Arc<Reporter>,
    poll_interval: Duration,
    report_interval: Duration,
}

impl Agent {
    pub fn new(
        sender: Arc<dyn MetricSender>,
        poll_interval: Duration,
        report_interval: Duration,
    ) -> Self {
        let metrics = Arc::new(LocalMetrics::new());
        Self {
            collector: Arc::new(Collector::new(Arc::clone(&metrics))),
            reporter: Arc::new(Reporter::new(metrics, sender)),
            poll_interval,
            report_interval,
        }
    }

    pub fn from_config(cfg: &AgentSection, sender: Arc<dyn MetricSender>) -> Self {
        Self::new(sender, cfg.poll_interval(), cfg.report_interval())
    }

    pub fn metrics(&self) -> Arc<LocalMetrics> {
        self.collector.metrics()
    }

    /// Run both tasks until the process ends.
    pub async fn run(self) {
        let collector = self.collector;
        let poll_every = self.poll_interval;
        let poll = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + poll_every, poll_every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                collector.poll_once();
            }
        });

        let reporter = self.reporter;
        let report_every = self.report_interval;
        let report = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + report_every, report_every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(e) = reporter.report_once().await {
                    tracing::warn!(error = %e, "report tick failed");
                }
            }
        });

        let (p, r) = tokio::join!(poll, report);
        if let Err(e) = p {
            tracing::error!(error = %e, "poll task ended");
        }
        if let Err(e) = r {
            tracing::error!(error = %e, "report task ended");
        }
    }
}
