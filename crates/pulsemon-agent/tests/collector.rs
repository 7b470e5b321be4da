#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use pulsemon_agent::collector::{POLL_COUNT, RANDOM_VALUE};
use pulsemon_agent::sampler::{RuntimeSampler, RUNTIME_GAUGES};
use pulsemon_agent::{Collector, LocalMetrics};

#[test]
fn sampler_reports_the_fixed_gauge_set() {
    let names: Vec<&str> = RuntimeSampler::new().sample().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, RUNTIME_GAUGES);
}

#[test]
fn poll_increments_poll_count_by_one() {
    let metrics = Arc::new(LocalMetrics::new());
    let collector = Collector::new(Arc::clone(&metrics));

    assert_eq!(metrics.counter(POLL_COUNT), None);
    collector.poll_once();
    assert_eq!(metrics.counter(POLL_COUNT), Some(1));
    collector.poll_once();
    assert_eq!(metrics.counter(POLL_COUNT), Some(2));
}

#[test]
fn poll_sets_random_value_in_unit_range() {
    let metrics = Arc::new(LocalMetrics::new());
    let collector = Collector::new(Arc::clone(&metrics));

    let mut nonzero = false;
    for _ in 0..5 {
        collector.poll_once();
        let v = metrics.gauge(RANDOM_VALUE).unwrap();
        assert!((0.0..1.0).contains(&v));
        nonzero |= v != 0.0;
    }
    assert!(nonzero);
}

#[test]
fn poll_fills_every_runtime_gauge() {
    let metrics = Arc::new(LocalMetrics::new());
    Collector::new(Arc::clone(&metrics)).poll_once();

    let snap = metrics.snapshot();
    for name in RUNTIME_GAUGES {
        assert!(snap.gauges.contains_key(name), "missing gauge {name}");
    }
    assert_eq!(snap.gauges.len(), RUNTIME_GAUGES.len() + 1);
    assert_eq!(snap.counters.len(), 1);
}

#[test]
fn local_metrics_overwrite_and_accumulate() {
    let metrics = LocalMetrics::new();
    metrics.update_gauge("TestGauge", 42.5);
    metrics.update_gauge("TestGauge", 1.0);
    metrics.update_counter("TestCounter", 10);
    metrics.update_counter("TestCounter", 5);

    assert_eq!(metrics.gauge("TestGauge"), Some(1.0));
    assert_eq!(metrics.counter("TestCounter"), Some(15));
}
