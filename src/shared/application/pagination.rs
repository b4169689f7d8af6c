/// Pagination support for listings
///
/// Standard pagination model used across all listing contexts. Everything is
/// computed client-side over the full fetched collection.
use serde::{Deserialize, Serialize};

/// Maximum number of page-selector buttons rendered at once
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Pagination parameters for a single engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 12,
        }
    }
}

impl PaginationParams {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Index of the first item of the page
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.limit()
    }

    pub fn limit(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.limit())
    }
}

/// Mutable pagination state owned by a listing controller
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)` after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.params().total_pages(self.total_items)
    }

    pub fn params(&self) -> PaginationParams {
        PaginationParams::new(self.current_page, self.page_size)
    }

    /// Change the page size; always goes back to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Move to `page` if it exists. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Record a new filtered total. A page that no longer exists resets to 1.
    pub fn sync_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        if self.current_page > self.total_pages() {
            self.current_page = 1;
        }
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        page_number_window(self.current_page, self.total_pages())
    }
}

/// Page numbers to render as selector buttons
///
/// Everything when there are at most [`MAX_PAGE_BUTTONS`] pages; otherwise a
/// window starting two pages before the current one, shifted to stay inside
/// `1..=total_pages`.
pub fn page_number_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let mut start = current.saturating_sub(2).max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);
    if end - start + 1 < MAX_PAGE_BUTTONS {
        start = end + 1 - MAX_PAGE_BUTTONS;
    }

    (start..=end).collect()
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: usize, params: &PaginationParams) -> Self {
        let total_pages = params.total_pages(total_count);

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.limit(),
            total_pages,
            page_numbers: page_number_window(params.page, total_pages),
        }
    }

    pub fn empty(page_size: usize) -> Self {
        Self::new(Vec::new(), 0, &PaginationParams::new(1, page_size))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}
