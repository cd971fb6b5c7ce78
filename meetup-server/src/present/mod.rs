//! Presentation helpers shared by the CLI and web front ends.

/// One page of a longer list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    /// 1-based page number.
    pub number: usize,

    /// Items on this page.
    pub items: &'a [T],

    /// Whether more pages follow.
    pub has_more: bool,
}

/// Iterator over fixed-size pages of a slice.
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    items: &'a [T],
    size: usize,
    offset: usize,
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = Page<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.items.len() {
            return None;
        }
        let end = (self.offset + self.size).min(self.items.len());
        let page = Page {
            number: self.offset / self.size + 1,
            items: &self.items[self.offset..end],
            has_more: end < self.items.len(),
        };
        self.offset = end;
        Some(page)
    }
}

/// Split `items` into pages of `size` (a size of zero is treated as one).
pub fn pages<T>(items: &[T], size: usize) -> Pages<'_, T> {
    Pages {
        items,
        size: size.max(1),
        offset: 0,
    }
}

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1))
}

/// A single page by 1-based number, if it exists.
pub fn page<T>(items: &[T], size: usize, number: usize) -> Option<Page<'_, T>> {
    pages(items, size).nth(number.checked_sub(1)?)
}

/// Fixed-precision score formatting.
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}
