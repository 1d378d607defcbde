//! Presentation layer: the product dashboard.
//!
//! # Data Flow
//! ```text
//! user event
//!     → session.rs (event loop, debounced search)
//!     → controller.rs (state transitions, fetch/submit)
//!     → client.rs (proxy /api routes)
//!     → controller state replaced
//!     → view.rs (table + pagination footer)
//! ```

pub mod api;
pub mod client;
pub mod controller;
pub mod debounce;
pub mod form;
pub mod session;
pub mod state;
pub mod view;

pub use api::{ClientError, ProductApi};
pub use client::ProxyClient;
pub use controller::{DashboardController, FetchTicket};
pub use debounce::Debouncer;
pub use form::{FormError, ProductForm};
pub use session::{DashboardEvent, DashboardSession};
pub use state::{ModalState, Notice, PageState};
