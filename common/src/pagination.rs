//! Abstractions for page-number pagination.

use std::{
    num::NonZeroUsize,
    ops::{Range, RangeInclusive},
};

/// Page-number pagination over a list of known length.
///
/// Pages are numbered from `1`. An empty list has no pages at all, while
/// the current page still points to `1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pagination {
    /// Maximum number of items on a single page.
    page_size: NonZeroUsize,

    /// Total number of items being paginated.
    total_items: usize,

    /// Total number of pages.
    total_pages: usize,

    /// Number of the current page.
    current_page: usize,
}

impl Pagination {
    /// Creates a new [`Pagination`] of an empty list.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            total_items: 0,
            total_pages: 0,
            current_page: 1,
        }
    }

    /// Returns the maximum number of items on a single page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the number of the current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the numbers of all the pages.
    #[must_use]
    pub const fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Recomputes the page count for a list of `total_items`, clamping the
    /// current page into the new bounds.
    pub fn recompute(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.total_pages = total_items.div_ceil(self.page_size.get());
        self.current_page = self.current_page.clamp(1, self.total_pages.max(1));
    }

    /// Recomputes the page count for a list of `total_items` and rewinds to
    /// the first page.
    pub fn reset(&mut self, total_items: usize) {
        self.current_page = 1;
        self.recompute(total_items);
    }

    /// Switches to the provided `page`.
    ///
    /// Pages outside of [`Pagination::pages()`] are ignored, in which case
    /// `false` is returned.
    pub fn change_page(&mut self, page: usize) -> bool {
        if !self.pages().contains(&page) {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Returns the range of item indices on the current page.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.current_page - 1)
            .saturating_mul(size)
            .min(self.total_items);
        let end = start.saturating_add(size).min(self.total_items);
        start..end
    }

    /// Returns the items of the current page.
    ///
    /// The `items` are expected to be the ones this [`Pagination`] was last
    /// computed for.
    #[must_use]
    pub fn slice<'i, T>(&self, items: &'i [T]) -> &'i [T] {
        let Range { start, end } = self.range();
        items
            .get(start.min(items.len())..end.min(items.len()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroUsize;

    use super::Pagination;

    fn pagination(total_items: usize) -> Pagination {
        let mut p = Pagination::new(NonZeroUsize::new(8).unwrap());
        p.reset(total_items);
        p
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(pagination(0).total_pages(), 0);
        assert_eq!(pagination(1).total_pages(), 1);
        assert_eq!(pagination(8).total_pages(), 1);
        assert_eq!(pagination(9).total_pages(), 2);
        assert_eq!(pagination(16).total_pages(), 2);
        assert_eq!(pagination(17).total_pages(), 3);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let mut p = pagination(0);
        assert_eq!(p.current_page(), 1);
        assert!(p.pages().is_empty());
        assert!(!p.change_page(1));
        assert_eq!(p.range(), 0..0);
        assert!(p.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let mut p = pagination(20);
        assert!(!p.change_page(0));
        assert!(!p.change_page(4));
        assert_eq!(p.current_page(), 1);

        assert!(p.change_page(3));
        assert_eq!(p.current_page(), 3);
        assert!(!p.change_page(4));
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn slices_current_page() {
        let items = (1..=20).collect::<Vec<u32>>();
        let mut p = pagination(items.len());
        assert_eq!(p.slice(&items), &[1, 2, 3, 4, 5, 6, 7, 8]);

        assert!(p.change_page(3));
        assert_eq!(p.slice(&items), &[17, 18, 19, 20]);
        assert_eq!(p.range(), 16..20);
    }

    #[test]
    fn recompute_clamps_current_page() {
        let mut p = pagination(30);
        assert!(p.change_page(4));

        p.recompute(10);
        assert_eq!(p.total_pages(), 2);
        assert_eq!(p.current_page(), 2);

        p.recompute(0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn reset_rewinds_to_first_page() {
        let mut p = pagination(30);
        assert!(p.change_page(2));

        p.reset(30);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 4);
    }

    #[test]
    fn pages_lists_every_page() {
        assert_eq!(pagination(17).pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
