//! Filtering and pagination over the loaded catalog
//!
//! Everything here is a pure function of its inputs. Filtering is a stable
//! linear scan preserving catalog order; pagination is arithmetic slicing.
//! Out-of-range pages yield empty slices rather than errors so callers never
//! have to pre-validate a page number against a recomputed total.

use crate::types::Book;

/// Default number of books per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How many page numbers the navigation window shows at most
const WINDOW_WIDTH: u32 = 5;

/// One page of results plus the total the filter produced
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Books on this page, in catalog order
    pub items: Vec<Book>,

    /// Total page count; an empty result set still reports one (empty) page
    pub total_pages: u32,
}

/// Page numbers to offer as navigation controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// At most five contiguous page numbers around the current page
    pub pages: Vec<u32>,

    /// Whether a "prev" control should be actionable
    pub prev_enabled: bool,

    /// Whether a "next" control should be actionable
    pub next_enabled: bool,
}

/// Select the books whose title contains `query` (case-insensitive) and,
/// when a genre is given, whose labels include it exactly.
///
/// An empty query matches everything. Order is preserved from the catalog.
pub fn filter(catalog: &[Book], query: &str, genre: Option<&str>) -> Vec<Book> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|book| {
            let title_match = book.title.to_lowercase().contains(&needle);
            let genre_match = genre.is_none_or(|g| book.has_genre(g));
            title_match && genre_match
        })
        .cloned()
        .collect()
}

/// Slice out page `page` (1-indexed) of `filtered`.
///
/// A page beyond the end yields an empty slice. Page 0 is treated as page 1.
pub fn paginate(filtered: &[Book], page: u32, page_size: usize) -> Page {
    debug_assert!(page_size > 0);
    let total_pages = (filtered.len().div_ceil(page_size) as u32).max(1);
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    let items = filtered.iter().skip(start).take(page_size).cloned().collect();
    Page { items, total_pages }
}

/// Compute the page-number window around `current`.
///
/// The window starts at `max(1, current - 2)` and ends at `min(total,
/// start + 4)`: near the upper boundary it shifts right instead of always
/// holding five entries.
pub fn page_window(current: u32, total: u32) -> PageWindow {
    let current = current.max(1);
    let total = total.max(1);
    let start = current.saturating_sub(2).max(1);
    let end = (start + WINDOW_WIDTH - 1).min(total);
    PageWindow {
        pages: (start..=end).collect(),
        prev_enabled: current > 1,
        next_enabled: current < total,
    }
}
