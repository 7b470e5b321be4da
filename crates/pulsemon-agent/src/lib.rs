//! pulsemon agent library entry.
//!
//! Samples process runtime statistics into a local snapshot on one timer and
//! pushes that snapshot to the server on another, one HTTP call per metric.
//! The outbound leg goes through the injected `MetricSender`.

pub mod agent;
pub mod collector;
pub mod config;
pub mod heap;
pub mod metrics;
pub mod reporter;
pub mod sampler;
pub mod sender;

pub use agent::Agent;
pub use collector::Collector;
pub use metrics::{LocalMetrics, Snapshot};
pub use reporter::Reporter;
pub use sender::{HttpSender, MetricSender};
