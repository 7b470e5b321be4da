//! Decimal-string wire codec used in `/update` and `/value` paths.
//!
//! Gauges travel with 6 fractional digits and are read back with 3; counters
//! are plain base-10 integers both ways. Deployed peers compare these strings
//! byte for byte, so the precisions are fixed. Non-finite gauges render as
//! `+Inf`, `-Inf` and `NaN` for the same reason.
//!
//! Gauge parsing accepts decimal and exponent literals plus the
//! `inf`/`infinity`/`nan` spellings (any case, optional sign). Hex float
//! literals such as `0x1p4` are rejected; no pulsemon agent emits them.

use crate::error::{MetricsError, Result};
use crate::metric::{MetricKind, MetricValue};

/// Fractional digits used when the agent sends a gauge.
pub const GAUGE_SEND_PRECISION: usize = 6;
/// Fractional digits used when the server returns a gauge.
pub const GAUGE_READ_PRECISION: usize = 3;

/// Decode a raw path segment into a value of `kind`.
pub fn parse_value(kind: MetricKind, raw: &str) -> Result<MetricValue> {
    match kind {
        MetricKind::Gauge => raw
            .parse::<f64>()
            .map(MetricValue::Gauge)
            .map_err(|e| MetricsError::InvalidValue(format!("gauge {raw:?}: {e}"))),
        MetricKind::Counter => raw
            .parse::<i64>()
            .map(MetricValue::Counter)
            .map_err(|e| MetricsError::InvalidValue(format!("counter {raw:?}: {e}"))),
    }
}

pub fn format_gauge_for_send(v: f64) -> String {
    format_gauge(v, GAUGE_SEND_PRECISION)
}

pub fn format_gauge_for_read(v: f64) -> String {
    format_gauge(v, GAUGE_READ_PRECISION)
}

fn format_gauge(v: f64, precision: usize) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.*}", precision, v)
    }
}

pub fn format_counter(v: i64) -> String {
    v.to_string()
}

/// Encoding used on the agent -> server leg.
pub fn format_for_send(value: &MetricValue) -> String {
    match *value {
        MetricValue::Gauge(v) => format_gauge_for_send(v),
        MetricValue::Counter(v) => format_counter(v),
    }
}

/// Encoding used on the server -> reader leg.
pub fn format_for_read(value: &MetricValue) -> String {
    match *value {
        MetricValue::Gauge(v) => format_gauge_for_read(v),
        MetricValue::Counter(v) => format_counter(v),
    }
}

pub fn update_path(kind: MetricKind, name: &str, value: &str) -> String {
    format!("/update/{kind}/{name}/{value}")
}
