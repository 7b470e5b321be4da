//! pulsemon server library entry.
//!
//! Wires the config loader, the ingest handler over the shared metric store,
//! and the HTTP transport into one router. Consumed by the binary
//! (`main.rs`), by integration tests, and by the agent's end-to-end tests.

pub mod app_state;
pub mod config;
pub mod ingest;
pub mod ops;
pub mod router;
pub mod transport;
