//! In-memory metric store.
//!
//! Two disjoint concurrent maps, one per kind, keyed by metric name. There
//! is no delete: an absent name has never been written. Every mutation
//! happens under the owning shard's write lock, so concurrent counter
//! updates on the same name never lose increments.
//!
//! `list_*` snapshots are consistent per key, not across keys.

use std::collections::HashMap;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{MetricsError, Result};
use crate::metric::{MetricKind, MetricValue};

#[derive(Default)]
pub struct MetricStore {
    gauges: DashMap<String, f64>,
    counters: DashMap<String, i64>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self {
            gauges: DashMap::new(),
            counters: DashMap::new(),
        }
    }

    /// Overwrite the gauge `name` with `value`.
    pub fn update_gauge(&self, name: &str, value: f64) {
        if let Some(mut g) = self.gauges.get_mut(name) {
            *g = value;
            return;
        }
        self.gauges.insert(name.to_string(), value);
    }

    /// Add `delta` to the counter `name`, starting from 0 on first write.
    ///
    /// Negative deltas are applied as-is; the sum saturates at the `i64`
    /// bounds instead of wrapping.
    pub fn update_counter(&self, name: &str, delta: i64) {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(mut e) => {
                let v = e.get_mut();
                *v = v.saturating_add(delta);
            }
            Entry::Vacant(e) => {
                tracing::trace!(name, "counter created");
                e.insert(delta);
            }
        }
    }

    /// Apply a decoded value to the namespace matching its kind.
    pub fn apply(&self, name: &str, value: MetricValue) {
        match value {
            MetricValue::Gauge(v) => self.update_gauge(name, v),
            MetricValue::Counter(d) => self.update_counter(name, d),
        }
    }

    pub fn get_gauge(&self, name: &str) -> Result<f64> {
        self.gauges
            .get(name)
            .map(|r| *r.value())
            .ok_or_else(|| not_found(MetricKind::Gauge, name))
    }

    pub fn get_counter(&self, name: &str) -> Result<i64> {
        self.counters
            .get(name)
            .map(|r| *r.value())
            .ok_or_else(|| not_found(MetricKind::Counter, name))
    }

    pub fn get(&self, kind: MetricKind, name: &str) -> Result<MetricValue> {
        match kind {
            MetricKind::Gauge => self.get_gauge(name).map(MetricValue::Gauge),
            MetricKind::Counter => self.get_counter(name).map(MetricValue::Counter),
        }
    }

    /// Owned copy of every gauge.
    pub fn list_gauges(&self) -> HashMap<String, f64> {
        self.gauges
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect()
    }

    /// Owned copy of every counter.
    pub fn list_counters(&self) -> HashMap<String, i64> {
        self.counters
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect()
    }
}

fn not_found(kind: MetricKind, name: &str) -> MetricsError {
    MetricsError::NotFound {
        kind,
        name: name.to_string(),
    }
}
