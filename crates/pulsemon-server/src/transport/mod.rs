//! Transport layer.
//!
//! - `http`: axum handlers over `MetricIngest` and the error -> status mapping.

pub mod http;
