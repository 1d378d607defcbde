//! Paginated listing types shared by the proxy client and the dashboard.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Pagination block reported by the backend alongside a page of products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// A page of products as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

/// Query parameters for the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32, search: impl Into<String>) -> Self {
        Self {
            page,
            limit,
            search: search.into(),
        }
    }
}
