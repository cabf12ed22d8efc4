//! Pagination shapes shared by list endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata
///
/// Pages are 1-based. `pages` is never zero: an empty result still has one
/// (empty) page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number
    pub page: u32,

    /// Number of items per page
    pub limit: u32,

    /// Total number of items
    pub total: u64,

    /// Total number of pages
    pub pages: u32,

    /// Whether there are more pages
    pub has_next: bool,

    /// Whether there are previous pages
    pub has_prev: bool,

    /// Offset of first item
    pub offset: u64,
}

/// List response with pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// List of items
    pub data: Vec<T>,

    /// Pagination metadata
    pub meta: PaginationMeta,
}

impl PaginationMeta {
    /// Create pagination metadata for an already-clamped page
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let pages = if total == 0 || limit == 0 {
            1
        } else {
            total.div_ceil(limit as u64) as u32
        };
        let offset = (page.max(1) as u64 - 1) * limit as u64;

        Self {
            page,
            limit,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
            offset,
        }
    }
}

impl<T> ListResponse<T> {
    /// Create a new list response
    pub fn new(data: Vec<T>, meta: PaginationMeta) -> Self {
        Self { data, meta }
    }

    /// Create from paginated data
    pub fn paginated(data: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        Self::new(data, PaginationMeta::new(page, limit, total))
    }

    /// Map the data to another type
    pub fn map<U, F>(self, f: F) -> ListResponse<U>
    where
        F: FnMut(T) -> U,
    {
        ListResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
