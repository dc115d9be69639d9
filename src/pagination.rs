//! In-memory listing engine: free-text filtering, page slicing and the
//! bounded-width pager shown under the listing tables.
//!
//! All three operations are pure functions over a snapshot of the record
//! set; callers re-run them on every search or page change.

use serde::Serialize;

/// Number of records shown per listing page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Width of the pager before it collapses into an ellipsized window.
const PAGER_WINDOW: usize = 5;

/// Record types that expose text fields the search box matches against.
pub trait Searchable {
    /// Fields the free-text search term is matched against.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match. `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Returns the records matching `term`, preserving their relative order.
///
/// The term is trimmed and lowercased; an empty term matches everything.
pub fn filter<T: Searchable + Clone>(records: &[T], term: &str) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

/// Returns the sub-sequence `[(page-1)*size, (page-1)*size + size)`.
///
/// A start index past the end yields an empty slice; callers are expected
/// to clamp the page with [`clamp_page`] before slicing.
pub fn page_slice<T: Clone>(records: &[T], current_page: usize, page_size: usize) -> Vec<T> {
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(records.len());
    records[start..end].to_vec()
}

/// Clamps a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// Produces the pager tokens around `current_page`; `None` is an ellipsis.
///
/// With more than five pages the window keeps the first and last page
/// visible and ellipsizes the gap, pinning the window to either edge when
/// the current page is within three of it.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= PAGER_WINDOW {
        return (1..=total_pages).map(Some).collect();
    }

    if current_page <= 3 {
        vec![Some(1), Some(2), Some(3), None, Some(total_pages)]
    } else if current_page + 2 >= total_pages {
        vec![
            Some(1),
            None,
            Some(total_pages - 2),
            Some(total_pages - 1),
            Some(total_pages),
        ]
    } else {
        vec![
            Some(1),
            None,
            Some(current_page - 1),
            Some(current_page),
            Some(current_page + 1),
            None,
            Some(total_pages),
        ]
    }
}

/// A page of records together with the pager state for the templates.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_numbers(current_page, total_pages);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}
