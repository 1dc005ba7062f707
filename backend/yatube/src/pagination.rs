//! Fixed-size page windows for the listing views.
//!
//! Every listing page shows at most [`PAGE_SIZE`] posts. Page numbers come in
//! from the `?page=` query parameter as raw strings and are clamped rather
//! than rejected: garbage or a missing value means page 1, anything past the
//! end means the last page. An empty result set still has one (empty) page.

use serde::Deserialize;

/// Number of items per listing page.
pub const PAGE_SIZE: i64 = 10;

/// Query parameters accepted by the listing views.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Computes page windows over a known total.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    total: i64,
    per_page: i64,
}

impl Paginator {
    pub fn new(total: i64, per_page: i64) -> Self {
        debug_assert!(per_page > 0);
        Self { total, per_page }
    }

    pub fn num_pages(&self) -> i64 {
        if self.total <= 0 {
            1
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    /// Resolve a raw `?page=` value to a valid page number.
    pub fn get_page(&self, raw: Option<&str>) -> i64 {
        let requested = raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1);
        requested.clamp(1, self.num_pages())
    }

    pub fn offset(&self, page_number: i64) -> i64 {
        (page_number - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// One resolved page of items, with the navigation state the templates need.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub num_pages: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_page_number(&self) -> i64 {
        self.number - 1
    }

    pub fn next_page_number(&self) -> i64 {
        self.number + 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
