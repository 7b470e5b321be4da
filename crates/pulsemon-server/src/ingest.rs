//! Metric ingest: decode `(type, name, value)` triples into store updates and
//! render reads. Transport-agnostic; the HTTP layer only maps errors to
//! status codes.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use pulsemon_core::error::{MetricsError, Result};
use pulsemon_core::wire::{format_counter, format_for_read, format_gauge_for_read, parse_value};
use pulsemon_core::{MetricKind, MetricStore};

pub struct MetricIngest {
    store: Arc<MetricStore>,
}

impl MetricIngest {
    pub fn new(store: Arc<MetricStore>) -> Self {
        Self { store }
    }

    /// Apply one update. The kind is checked before the value so an unknown
    /// kind is reported as such even when the value is also malformed.
    pub fn handle_update(&self, kind: &str, name: &str, raw: &str) -> Result<()> {
        let kind: MetricKind = kind.parse()?;
        if name.is_empty() {
            return Err(MetricsError::NotFound {
                kind,
                name: String::new(),
            });
        }
        let value = parse_value(kind, raw)?;
        self.store.apply(name, value);
        Ok(())
    }

    /// Current value of one metric, formatted for readers.
    pub fn handle_get(&self, kind: &str, name: &str) -> Result<String> {
        let kind: MetricKind = kind.parse()?;
        let value = self.store.get(kind, name)?;
        Ok(format_for_read(&value))
    }

    /// Plain-text listing of every gauge then every counter, sorted by name.
    pub fn handle_list(&self) -> String {
        let gauges: BTreeMap<_, _> = self.store.list_gauges().into_iter().collect();
        let counters: BTreeMap<_, _> = self.store.list_counters().into_iter().collect();

        let mut out = String::from("Metrics:\n\n");

        out.push_str("Gauges:\n");
        for (name, v) in &gauges {
            let _ = writeln!(out, "{}: {}", name, format_gauge_for_read(*v));
        }

        out.push_str("\nCounters:\n");
        for (name, v) in &counters {
            let _ = writeln!(out, "{}: {}", name, format_counter(*v));
        }
        out
    }
}
