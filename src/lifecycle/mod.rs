//! Lifecycle management.
//!
//! ```text
//! signals.rs: SIGTERM/SIGINT → Shutdown::trigger
//! shutdown.rs: broadcast → HTTP server stops accepting, drains, exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
