//! Top-level facade crate for pulsemon.
//!
//! Re-exports the core types, the server library and the agent library so
//! users can depend on a single crate.

pub mod core {
    pub use pulsemon_core::*;
}

pub mod server {
    pub use pulsemon_server::*;
}

pub mod agent {
    pub use pulsemon_agent::*;
}
