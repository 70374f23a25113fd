use serde::{Deserialize, Serialize};

/// Page size of the original grid (rows per page).
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// One resolved page of an ordered row sequence.
///
/// `start..end` is the half-open slice into the sequence; `page_index` is
/// the effective (clamped) index actually served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub start: usize,
    pub end: usize,
    pub page_index: usize,
    pub total_pages: usize,
}

impl Page {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Paginator: clamp `page_index` into the valid range for `row_count` rows
/// and resolve the slice bounds.
///
/// `total_pages` is `ceil(row_count / page_size)`; zero total pages behaves
/// as exactly one valid empty page. An out-of-range request is clamped,
/// never an error.
pub fn paginate(row_count: usize, page_index: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = row_count.div_ceil(page_size);
    let effective = page_index.min(total_pages.saturating_sub(1));
    let start = (effective * page_size).min(row_count);
    let end = ((effective + 1) * page_size).min(row_count);
    Page {
        start,
        end,
        page_index: effective,
        total_pages,
    }
}
