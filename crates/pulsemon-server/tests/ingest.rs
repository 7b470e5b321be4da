#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use pulsemon_core::MetricStore;
use pulsemon_server::ingest::MetricIngest;

fn ingest() -> (MetricIngest, Arc<MetricStore>) {
    let store = Arc::new(MetricStore::new());
    (MetricIngest::new(Arc::clone(&store)), store)
}

#[test]
fn gauge_round_trip_uses_read_precision() {
    let (ingest, store) = ingest();
    ingest.handle_update("gauge", "x", "42.500000").unwrap();
    assert_eq!(store.get_gauge("x").unwrap(), 42.5);
    assert_eq!(ingest.handle_get("gauge", "x").unwrap(), "42.500");
}

#[test]
fn counter_updates_accumulate() {
    let (ingest, _) = ingest();
    ingest.handle_update("counter", "c", "10").unwrap();
    ingest.handle_update("counter", "c", "5").unwrap();
    assert_eq!(ingest.handle_get("counter", "c").unwrap(), "15");
}

#[test]
fn unknown_kind_is_rejected() {
    let (ingest, store) = ingest();
    let err = ingest.handle_update("bogus", "x", "1").unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNKNOWN_METRIC_TYPE");

    // kind wins over a malformed value
    let err = ingest.handle_update("bogus", "x", "nope").unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNKNOWN_METRIC_TYPE");

    let err = ingest.handle_get("histogram", "x").unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNKNOWN_METRIC_TYPE");

    assert!(store.list_gauges().is_empty());
    assert!(store.list_counters().is_empty());
}

#[test]
fn malformed_values_are_rejected_without_side_effects() {
    let (ingest, store) = ingest();
    let err = ingest.handle_update("gauge", "g", "fast").unwrap_err();
    assert_eq!(err.client_code().as_str(), "INVALID_VALUE");
    let err = ingest.handle_update("counter", "c", "1.5").unwrap_err();
    assert_eq!(err.client_code().as_str(), "INVALID_VALUE");

    assert!(store.get_gauge("g").is_err());
    assert!(store.get_counter("c").is_err());
}

#[test]
fn infinite_gauges_read_back_in_go_spelling() {
    let (ingest, _) = ingest();
    ingest.handle_update("gauge", "p", "Inf").unwrap();
    ingest.handle_update("gauge", "n", "-Inf").unwrap();
    ingest.handle_update("gauge", "q", "NaN").unwrap();
    assert_eq!(ingest.handle_get("gauge", "p").unwrap(), "+Inf");
    assert_eq!(ingest.handle_get("gauge", "n").unwrap(), "-Inf");
    assert_eq!(ingest.handle_get("gauge", "q").unwrap(), "NaN");
}

#[test]
fn empty_name_is_not_found() {
    let (ingest, _) = ingest();
    let err = ingest.handle_update("gauge", "", "1").unwrap_err();
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[test]
fn get_unknown_name_is_not_found() {
    let (ingest, _) = ingest();
    let err = ingest.handle_get("gauge", "missing").unwrap_err();
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    let err = ingest.handle_get("counter", "missing").unwrap_err();
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[test]
fn empty_listing_is_well_formed() {
    let (ingest, _) = ingest();
    assert_eq!(ingest.handle_list(), "Metrics:\n\nGauges:\n\nCounters:\n");
}

#[test]
fn listing_has_gauges_then_counters_sorted() {
    let (ingest, _) = ingest();
    ingest.handle_update("gauge", "b", "2").unwrap();
    ingest.handle_update("gauge", "a", "1.23456").unwrap();
    ingest.handle_update("counter", "PollCount", "4").unwrap();
    ingest.handle_update("counter", "PollCount", "1").unwrap();

    assert_eq!(
        ingest.handle_list(),
        "Metrics:\n\nGauges:\na: 1.235\nb: 2.000\n\nCounters:\nPollCount: 5\n"
    );
}
