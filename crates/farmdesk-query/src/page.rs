//! Paginated query results.

/// One page of matching records plus pagination metadata.
///
/// `total_pages` is `ceil(total_matched / page_size)`, or `0` when nothing
/// matched. A page past the end holds no items but still reports the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Page<T> {
    /// Records on this page, in source order.
    pub items: Vec<T>,
    /// Number of records that passed search and filters.
    pub total_matched: usize,
    /// The requested 1-based page number.
    pub page: usize,
    /// The requested page size.
    pub page_size: usize,
    /// Number of non-empty pages.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Builds a page, deriving `total_pages` from the match count.
    ///
    /// `page_size` must be non-zero; [`ListQuery::validate`] guarantees this
    /// for pages produced by the engine.
    ///
    /// [`ListQuery::validate`]: crate::ListQuery::validate
    pub fn new(items: Vec<T>, total_matched: usize, page: usize, page_size: usize) -> Self {
        Self {
            items,
            total_matched,
            page,
            page_size,
            total_pages: total_pages(total_matched, page_size),
        }
    }

    /// Returns `true` when no record matched at all.
    ///
    /// This is the empty-state condition. A page past the end of a non-empty
    /// result is not empty in this sense; check `items` for that.
    pub fn is_empty(&self) -> bool {
        self.total_matched == 0
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// Returns `true` if a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first record on this page, if any.
    pub fn first_item_number(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(
                self.page
                    .saturating_sub(1)
                    .saturating_mul(self.page_size)
                    .saturating_add(1),
            )
        }
    }

    /// 1-based position of the last record on this page, if any.
    pub fn last_item_number(&self) -> Option<usize> {
        self.first_item_number()
            .map(|first| first.saturating_add(self.items.len() - 1))
    }

    /// Page numbers to offer as pagination controls.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Maps the items, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_matched: self.total_matched,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

impl<'a, T: Clone> Page<&'a T> {
    /// Clones the borrowed items into an owned page.
    pub fn cloned(self) -> Page<T> {
        self.map(T::clone)
    }
}

/// Number of pages needed for `total_matched` records.
pub fn total_pages(total_matched: usize, page_size: usize) -> usize {
    if total_matched == 0 {
        0
    } else {
        total_matched.div_ceil(page_size)
    }
}
