use serde::Serialize;

/// Listings shown per page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Where a result page sits within the filtered, sorted listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// 1-based page that was requested
    pub page: usize,
    pub page_size: usize,
    /// Listings that survived the filter stage
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; 0 when nothing matched
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size);

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Page number for a "previous" control, never below 1
    pub fn previous(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    /// Page number for a "next" control, never past the last page
    pub fn next(&self) -> usize {
        (self.page + 1).min(self.total_pages.max(1))
    }

    /// Page-number window for pagination controls
    pub fn visible_pages(&self) -> Vec<PageLink> {
        visible_pages(self.page, self.total_pages)
    }
}

/// Entry in a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// First page, last page and one page either side of `current`, with an
/// ellipsis for each gap. Empty when there is at most one page.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<PageLink> {
    const DELTA: usize = 1;

    if total_pages <= 1 {
        return Vec::new();
    }

    let mut links = Vec::new();
    let mut prev: Option<usize> = None;
    for i in 1..=total_pages {
        let near_current = i + DELTA >= current && i <= current + DELTA;
        if i != 1 && i != total_pages && !near_current {
            continue;
        }
        if prev.is_some_and(|p| i - p > 1) {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(i));
        prev = Some(i);
    }
    links
}

/// Pagination stage: the `[(page-1)*size, page*size)` slice, clamped to the input
///
/// Page 0 or pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_items_make_three_pages() {
        let items: Vec<usize> = (0..13).collect();
        let meta = PageMeta::new(1, 6, items.len());
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);

        assert_eq!(paginate(&items, 1, 6).len(), 6);
        assert_eq!(paginate(&items, 3, 6), &[12]);
        assert!(paginate(&items, 4, 6).is_empty());
        assert!(paginate(&items, 0, 6).is_empty());
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let meta = PageMeta::new(1, 6, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert_eq!(meta.next(), 1);
        assert_eq!(meta.previous(), 1);
        assert!(meta.visible_pages().is_empty());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let meta = PageMeta::new(2, 0, 3);
        assert_eq!(meta.page_size, 1);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_prev && meta.has_next);
    }

    #[test]
    fn test_prev_next_are_clamped() {
        let last = PageMeta::new(3, 6, 13);
        assert!(!last.has_next);
        assert_eq!(last.next(), 3);
        assert_eq!(last.previous(), 2);
    }

    #[test]
    fn test_visible_pages_window() {
        use PageLink::{Ellipsis, Page};

        assert!(visible_pages(1, 1).is_empty());
        assert_eq!(visible_pages(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            visible_pages(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }
}
