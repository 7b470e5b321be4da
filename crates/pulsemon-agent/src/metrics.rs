//! Agent-local metric snapshot.
//!
//! A single `RwLock` covers both maps: a sample tick replaces its gauges and
//! bumps its counters under one write guard, and a report tick copies both
//! maps under one read guard. Maps are ordered so report iteration is stable.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use pulsemon_core::wire::format_for_send;
use pulsemon_core::{MetricKind, MetricValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub gauges: BTreeMap<String, f64>,
    pub counters: BTreeMap<String, i64>,
}

impl Snapshot {
    /// `(kind, name, encoded value)` for every metric: gauges by name, then
    /// counters by name.
    pub fn wire_entries(&self) -> Vec<(MetricKind, String, String)> {
        let gauges = self.gauges.iter().map(|(n, v)| {
            let value = format_for_send(&MetricValue::Gauge(*v));
            (MetricKind::Gauge, n.clone(), value)
        });
        let counters = self.counters.iter().map(|(n, v)| {
            let value = format_for_send(&MetricValue::Counter(*v));
            (MetricKind::Counter, n.clone(), value)
        });
        gauges.chain(counters).collect()
    }
}

#[derive(Debug, Default)]
pub struct LocalMetrics {
    inner: RwLock<Snapshot>,
}

impl LocalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_gauge(&self, name: &str, value: f64) {
        self.apply(&[(name, value)], &[]);
    }

    pub fn update_counter(&self, name: &str, delta: i64) {
        self.apply(&[], &[(name, delta)]);
    }

    /// Overwrite `gauges` and add `counter_deltas` as one atomic step.
    pub fn apply(&self, gauges: &[(&str, f64)], counter_deltas: &[(&str, i64)]) {
        let mut snap = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        for (name, v) in gauges {
            snap.gauges.insert((*name).to_string(), *v);
        }
        for (name, d) in counter_deltas {
            let c = snap.counters.entry((*name).to_string()).or_insert(0);
            *c = c.saturating_add(*d);
        }
    }

    pub fn gauge(&self, name: &str) -> Option<f64> {
        self.read().gauges.get(name).copied()
    }

    pub fn counter(&self, name: &str) -> Option<i64> {
        self.read().counters.get(name).copied()
    }

    /// Consistent owned copy of every local metric.
    pub fn snapshot(&self) -> Snapshot {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Snapshot> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}
