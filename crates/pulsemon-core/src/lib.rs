//! pulsemon core: metric primitives, wire codec, error types, and the
//! in-memory metric store.
//!
//! This crate defines the contracts shared by the server and the agent. It
//! carries no transport or runtime dependencies so both sides (and tests) can
//! use it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `MetricsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod metric;
pub mod store;
pub mod wire;

/// Shared result type.
pub use error::{MetricsError, Result};
pub use metric::{MetricKind, MetricValue};
pub use store::MetricStore;
