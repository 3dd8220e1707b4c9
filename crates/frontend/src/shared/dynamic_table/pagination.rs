pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 8, 10, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Slice of rows shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total_pages: usize,
    /// Requested page clamped to the last existing one (0-indexed).
    pub page: usize,
}

pub fn page_window(total: usize, page: usize, page_size: usize) -> PageWindow {
    let size = page_size.max(1);
    let total_pages = if total == 0 { 1 } else { total.div_ceil(size) };
    let page = page.min(total_pages - 1);
    let start = (page * size).min(total);
    let end = (start + size).min(total);
    PageWindow {
        start,
        end,
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let w = page_window(20, 0, DEFAULT_PAGE_SIZE);
        assert_eq!((w.start, w.end, w.total_pages, w.page), (0, 8, 3, 0));
        let last = page_window(20, 2, DEFAULT_PAGE_SIZE);
        assert_eq!((last.start, last.end), (16, 20));
    }

    #[test]
    fn test_page_clamped_after_rows_shrink() {
        let w = page_window(9, 5, 8);
        assert_eq!(w.page, 1);
        assert_eq!((w.start, w.end), (8, 9));
    }

    #[test]
    fn test_empty_table_has_one_page() {
        let w = page_window(0, 3, 10);
        assert_eq!((w.start, w.end, w.total_pages, w.page), (0, 0, 1, 0));
    }
}
