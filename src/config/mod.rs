//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DashboardConfig (validated, immutable)
//!     → CLI flags override selected fields in main
//! ```
//!
//! All fields have defaults so an empty file (or no file) is a valid config.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    BackendConfig, DashboardConfig, ListenerConfig, ObservabilityConfig, SecurityConfig,
    TimeoutConfig, ViewConfig,
};
