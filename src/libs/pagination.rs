//! Fixed-size pages over an ordered result set.
//!
//! Pages are numbered from 1. Asking for a page past the end yields an empty
//! page rather than an error, and page numbers below 1 are read as 1.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            items,
            page: clamp_page(page),
            per_page,
            total,
            pages: page_count(total, per_page),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn prev_num(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_num(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }
}

/// Number of pages needed for `total` rows; zero rows means zero pages.
pub fn page_count(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page as u64) as u32
}

pub fn clamp_page(page: u32) -> u32 {
    page.max(1)
}

/// Row offset of the first item on `page`.
pub fn offset(page: u32, per_page: u32) -> u64 {
    (clamp_page(page) as u64 - 1) * per_page as u64
}
