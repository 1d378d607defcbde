//! Product catalog types.
//!
//! Shared by the proxy layer's tests, the dashboard controller and the CLI.
//! The proxy itself relays backend bodies untouched and never decodes them
//! into these types.

pub mod pagination;
pub mod price;
pub mod product;

pub use pagination::{ListQuery, Pagination, ProductPage};
pub use price::{format_price_input, format_usd, parse_price_input};
pub use product::{Product, ProductInput, ProductUpdate};
