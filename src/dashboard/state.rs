//! Dashboard view state: pagination/filter, modal, notifications.

use crate::catalog::{Pagination, Product};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client-side view of the paginated, filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Current 1-based page.
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    /// Live search box contents (not the debounced term).
    pub search: String,
}

impl PageState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            total_pages: 1,
            search: String::new(),
        }
    }

    /// A search edit always starts over at page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Returns whether the page actually changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Take the backend's pagination block. `search` is left as typed.
    pub fn apply(&mut self, pagination: &Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
        self.total = pagination.total;
        self.total_pages = pagination.total_pages;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// The create/edit modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Creating,
    Editing(Product),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn editing(&self) -> Option<&Product> {
        match self {
            Self::Editing(product) => Some(product),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Closed => None,
            Self::Creating => Some("Add New Product"),
            Self::Editing(_) => Some("Edit Product"),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Editing(_) => "Update",
            _ => "Add",
        }
    }
}

/// A transient user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
