//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! proxy handlers, dashboard controller
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! The request ID set by the HTTP layer is attached to every request span.

pub mod logging;
pub mod metrics;
