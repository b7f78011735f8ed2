//! Pagination controller
//!
//! Page math over a (page, limit, total) triple. Pages are 1-indexed; `total`
//! is the count of records matching the query and is authoritative when the
//! server drives paging. Actual slicing happens server-side for list
//! endpoints or client-side via [`slice_page`].

/// Current paging window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-indexed current page
    pub page: u32,
    /// Rows per page
    pub limit: u32,
    /// Total matching records (server-authoritative when paging is remote)
    pub total: u64,
}

impl PageWindow {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    /// Total page count, `ceil(total / limit)`
    pub fn total_pages(&self) -> u32 {
        if self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit as u64) as u32
    }

    /// 1-indexed inclusive range of rows shown on the current page, or None
    /// when there are no rows at all.
    pub fn display_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let first = (self.page as u64 - 1) * self.limit as u64 + 1;
        let last = (self.page as u64 * self.limit as u64).min(self.total);
        Some((first, last))
    }

    /// Whether a requested page is within bounds; out-of-range requests are
    /// rejected as no-ops by callers.
    pub fn accepts_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages()
    }

    /// Move to a page, rejecting out-of-range requests. Returns whether the
    /// page actually changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        if !self.accepts_page(page) || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Change the page size. Always resets to page 1 so the window cannot
    /// land past the end of the shrunken page count.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
    }
}

/// Client-side slice of an in-memory row set for the current page
pub fn slice_page<T>(rows: &[T], page: u32, limit: u32) -> &[T] {
    let start = ((page.max(1) as usize) - 1).saturating_mul(limit as usize);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + limit as usize).min(rows.len());
    &rows[start..end]
}
