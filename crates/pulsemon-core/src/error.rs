//! Shared error type across pulsemon crates.

use thiserror::Error;

use crate::metric::MetricKind;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed numeric literal.
    InvalidValue,
    /// Metric kind outside {gauge, counter}.
    UnknownMetricType,
    /// Metric never written, or request path incomplete.
    NotFound,
    /// Outbound send failed or got a non-200 reply.
    TransportFailure,
    /// Config file could not be read or validated.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and test assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidValue => "INVALID_VALUE",
            ClientCode::UnknownMetricType => "UNKNOWN_METRIC_TYPE",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::TransportFailure => "TRANSPORT_FAILURE",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core, server and agent.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("unknown metric type: {0}")]
    UnknownMetricType(String),
    #[error("{kind} metric {name} not found")]
    NotFound { kind: MetricKind, name: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("bad config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricsError::InvalidValue(_) => ClientCode::InvalidValue,
            MetricsError::UnknownMetricType(_) => ClientCode::UnknownMetricType,
            MetricsError::NotFound { .. } => ClientCode::NotFound,
            MetricsError::Transport(_) => ClientCode::TransportFailure,
            MetricsError::Config(_) => ClientCode::BadConfig,
            MetricsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MetricsError::Internal(_) => ClientCode::Internal,
        }
    }
}
