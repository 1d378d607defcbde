//! Proxy layer: HTTP handling.
//!
//! # Data Flow
//! ```text
//! Dashboard request
//!     → server.rs (Axum router, request ID, tracing, limits)
//!     → handlers.rs (extract & validate parameters)
//!     → backend client (single forward)
//!     → response.rs (relay body, or 400 / generic 500)
//!     → Send to client
//! ```

pub mod handlers;
pub mod payload;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{build_router, AppState, HttpServer};
