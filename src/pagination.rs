//! Windowed browsing over a collection that was fetched in one go.
//!
//! The index only ever moves in whole windows. There is no wraparound and the
//! last window may be short.

/// Window size used by every listing carousel
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    index: usize,
    len: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

impl Paginator {
    /// A zero page size is treated as one
    pub fn new(page_size: usize, len: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            index: 0,
            len,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Start of the current window, always a multiple of the page size
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_next(&self) -> bool {
        self.index + self.page_size < self.len
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// Advance one window. Returns false (and does nothing) on the last window.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += self.page_size;
        true
    }

    /// Go back one window. Returns false (and does nothing) at the start.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.index = self.index.saturating_sub(self.page_size);
        true
    }

    /// Track a new collection length, going back to the first window
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    /// 1-based number of the current window
    pub fn page_number(&self) -> usize {
        self.index / self.page_size + 1
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.page_size)
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.index.min(self.len);
        start..(start + self.page_size).min(self.len)
    }

    /// The current window of `items`
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.index.min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

/// A collection paired with its paginator
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    paginator: Paginator,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_page_size(items, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Self {
        let paginator = Paginator::new(page_size, items.len());
        Self { items, paginator }
    }

    /// Swap in a freshly fetched collection
    pub fn replace(&mut self, items: Vec<T>) {
        self.paginator.reset(items.len());
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible(&self) -> &[T] {
        self.paginator.visible(&self.items)
    }

    pub fn next(&mut self) -> bool {
        self.paginator.next()
    }

    pub fn prev(&mut self) -> bool {
        self.paginator.prev()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }
}
