//! Metric kinds and values.

use std::fmt;
use std::str::FromStr;

use crate::error::MetricsError;

/// The two metric namespaces. A gauge and a counter may share a name
/// without any relationship between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    /// Wire name used in URL paths.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            other => Err(MetricsError::UnknownMetricType(other.to_string())),
        }
    }
}

/// A single decoded metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Latest point-in-time value; a write overwrites.
    Gauge(f64),
    /// Additive delta; a write accumulates.
    Counter(i64),
}
