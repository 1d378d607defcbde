//! Product catalog dashboard.
//!
//! A proxy layer (`http`, `backend`) forwards product list, fetch, create and
//! update calls to an external backend, and a presentation layer
//! (`dashboard`) keeps a paginated, searchable product table in sync with it.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::DashboardConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
