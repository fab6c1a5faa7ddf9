//! Pagination over a filtered view.

use crate::error::{EngineError, Result};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page buttons in the pagination control.
pub const PAGE_WINDOW: usize = 5;

/// Page size and 1-based current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawPageState")]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

#[derive(serde::Deserialize)]
struct RawPageState {
    page_size: usize,
    current_page: usize,
}

impl TryFrom<RawPageState> for PageState {
    type Error = EngineError;

    fn try_from(raw: RawPageState) -> Result<Self> {
        Ok(Self::new(raw.page_size)?.with_page(raw.current_page))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(EngineError::ZeroPageSize);
        }
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Move to `page`; zero is treated as the first page.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page.max(1);
        self
    }

    #[must_use]
    pub fn first(self) -> Self {
        self.with_page(1)
    }

    /// Clamp the current page to `[1, total_pages(count)]`.
    #[must_use]
    pub fn clamped(self, count: usize) -> Self {
        let last = total_pages(count, self.page_size);
        self.with_page(self.current_page.min(last))
    }
}

/// `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Page numbers for the pagination control, centred on `current`.
///
/// At most [`PAGE_WINDOW`] numbers, strictly increasing, all inside
/// `[1, total]`.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    let total = total.max(1);
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }
    let current = current.clamp(1, total);
    let half = PAGE_WINDOW / 2;
    let start = current
        .saturating_sub(half)
        .clamp(1, total - (PAGE_WINDOW - 1));
    (start..start + PAGE_WINDOW).collect()
}

/// One page of a view plus the metadata the pagination control needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    /// Current page after clamping.
    pub current_page: usize,
    pub total_pages: usize,
    pub window: Vec<usize>,
    pub total_rows: usize,
    /// 1-based index of the first row shown, 0 when the page is empty.
    pub first_row: usize,
    /// 1-based index of the last row shown, 0 when the page is empty.
    pub last_row: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Slice `rows` for `state`, clamping an out-of-range page.
pub fn paginate<T: Clone>(rows: &[T], state: &PageState) -> Page<T> {
    let state = state.clamped(rows.len());
    let total_pages = total_pages(rows.len(), state.page_size);
    let start = (state.current_page - 1) * state.page_size;
    let end = (start + state.page_size).min(rows.len());
    let slice = rows.get(start..end).unwrap_or_default();
    let (first_row, last_row) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };
    Page {
        rows: slice.to_vec(),
        current_page: state.current_page,
        total_pages,
        window: page_window(state.current_page, total_pages),
        total_rows: rows.len(),
        first_row,
        last_row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageState::new(0).unwrap_err(), EngineError::ZeroPageSize);
    }

    #[test]
    fn total_pages_never_below_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn window_shows_all_when_few_pages() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(3, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_is_centred_and_clamped() {
        assert_eq!(page_window(1, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 12), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(11, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(12, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(40, 12), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let rows: Vec<u32> = (1..=23).collect();
        let page = paginate(&rows, &PageState::new(10).unwrap().with_page(9));
        assert_eq!(page.current_page, 3);
        assert_eq!(page.rows, vec![21, 22, 23]);
        assert_eq!((page.first_row, page.last_row), (21, 23));
        assert!(!page.has_next());
    }

    #[test]
    fn empty_view_yields_single_empty_page() {
        let rows: Vec<u32> = Vec::new();
        let page = paginate(&rows, &PageState::default().with_page(4));
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(page.is_empty());
        assert_eq!(page.window, vec![1]);
        assert_eq!((page.first_row, page.last_row), (0, 0));
    }

    #[test]
    fn deserialization_enforces_positive_page_size() {
        let result: std::result::Result<PageState, _> =
            serde_json::from_str(r#"{"page_size":0,"current_page":1}"#);
        assert!(result.is_err());
        let state: PageState = serde_json::from_str(r#"{"page_size":5,"current_page":0}"#).unwrap();
        assert_eq!(state.current_page(), 1);
    }
}
