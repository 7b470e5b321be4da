//! Poll tick: refresh the local snapshot from runtime statistics.

use std::sync::Arc;

use crate::metrics::LocalMetrics;
use crate::sampler::RuntimeSampler;

/// Gauge holding a fresh value in [0, 1) on every poll.
pub const RANDOM_VALUE: &str = "RandomValue";
/// Counter incremented once per poll.
pub const POLL_COUNT: &str = "PollCount";

pub struct Collector {
    metrics: Arc<LocalMetrics>,
    sampler: RuntimeSampler,
}

impl Collector {
    pub fn new(metrics: Arc<LocalMetrics>) -> Self {
        Self {
            metrics,
            sampler: RuntimeSampler::new(),
        }
    }

    pub fn metrics(&self) -> Arc<LocalMetrics> {
        Arc::clone(&self.metrics)
    }

    /// One poll tick. Never touches the network.
    pub fn poll_once(&self) {
        let mut gauges = self.sampler.sample();
        gauges.push((RANDOM_VALUE, rand::random::<f64>()));

        self.metrics.apply(&gauges, &[(POLL_COUNT, 1)]);
        tracing::trace!(gauges = gauges.len(), "runtime metrics collected");
    }
}
