//! Data service response wrapper types

use serde::{Deserialize, Serialize};

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Total items across all pages
    pub total_count: u64,
}

impl<T> PaginatedResponse<T> {
    /// Create a response
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u64) -> Self {
        Self {
            items,
            page,
            page_size,
            total_count,
        }
    }

    /// Empty first page
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: 0,
            total_count: 0,
        }
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}
