//! Fixed-size, 1-based page slicing over an ordered sequence.

use std::ops::Range;

/// Default number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Normalize an untrusted page number: anything below 1 becomes 1.
pub fn normalize_page(page: i64) -> usize {
    if page < 1 {
        1
    } else {
        usize::try_from(page).unwrap_or(usize::MAX)
    }
}

/// Index range `[(page-1)*size, page*size)` clamped to `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Slice one page out of `items`. A page past the end is empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}
