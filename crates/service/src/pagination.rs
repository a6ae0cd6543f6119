//! Pagination types for the service layer
//!
//! `PageRequest` is validated locally rather than clamped: a negative index or
//! a size outside `1..=MAX_PAGE_SIZE` is rejected.

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRequest {
    /// 0-based page index
    pub index: i64,
    /// items per page
    pub size: i64,
}

impl PageRequest {
    pub fn new(index: i64, size: i64) -> Self { Self { index, size } }

    /// Check bounds and convert to `(page_idx, per_page)` as `u64`.
    pub fn validate(self) -> Result<(u64, u64), ServiceError> {
        if self.index < 0 {
            return Err(ServiceError::InvalidArgument(format!("page index must be >= 0, got {}", self.index)));
        }
        if self.size <= 0 {
            return Err(ServiceError::InvalidArgument(format!("page size must be > 0, got {}", self.size)));
        }
        if self.size > MAX_PAGE_SIZE {
            return Err(ServiceError::InvalidArgument(format!("page size must be <= {MAX_PAGE_SIZE}, got {}", self.size)));
        }
        Ok((self.index as u64, self.size as u64))
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { index: 0, size: DEFAULT_PAGE_SIZE } }
}

/// One page of an ordered result set plus whole-set metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub index: u64,
    pub size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, index: u64, size: u64, total_count: u64) -> Self {
        Self { items, index, size, total_count, total_pages: total_pages(total_count, size) }
    }

    /// Convert every item, keeping the metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            index: self.index,
            size: self.size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

pub fn total_pages(total_count: u64, size: u64) -> u64 {
    if size == 0 { 0 } else { total_count.div_ceil(size) }
}
