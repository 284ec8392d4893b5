//! Incremental pagination state: app-owned, SDK-provided update logic.
//!
//! A [`Paginated`] accumulates pages fetched one after another. Its cursor only
//! moves forward: a page is accepted only for the cursor the container expects
//! next, so late or duplicate responses can never rewind it.

use std::fmt;

/// Position of a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// 1-based page number (`page` / `pageSize` listings).
    Page(u32),
    /// Row offset (`offset` / `limit` listings).
    Offset(u32),
}

impl Cursor {
    /// The cursor following a page of `received` rows fetched at `self`.
    pub fn advance(self, received: usize) -> Cursor {
        match self {
            Cursor::Page(p) => Cursor::Page(p.saturating_add(1)),
            Cursor::Offset(o) => Cursor::Offset(o.saturating_add(received as u32)),
        }
    }

    fn position(self) -> u32 {
        match self {
            Cursor::Page(p) | Cursor::Offset(p) => p,
        }
    }
}

/// One page as returned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Cap the page at `size` rows. Dropping rows marks the page as having more.
    pub fn truncate(&mut self, size: usize) {
        if self.items.len() > size {
            self.items.truncate(size);
            self.has_more = true;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// The page was fetched for a cursor other than the expected next one.
    OutOfOrder { expected: Cursor, got: Cursor },
    /// The listing is complete.
    Exhausted,
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::OutOfOrder { expected, got } => {
                write!(f, "Page out of order: expected {:?}, got {:?}", expected, got)
            }
            PaginationError::Exhausted => write!(f, "No more pages"),
        }
    }
}

impl std::error::Error for PaginationError {}

/// Accumulated rows of a paginated listing.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    items: Vec<T>,
    page_size: usize,
    next: Cursor,
    has_more: bool,
    pages_loaded: u32,
}

impl<T> Paginated<T> {
    /// An empty listing that will start at `first`.
    pub fn new(first: Cursor, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size,
            next: first,
            has_more: true,
            pages_loaded: 0,
        }
    }

    /// Accept the page fetched at `cursor`.
    ///
    /// Rows beyond the page size are dropped and stay reachable through the
    /// next cursor. `has_more` follows the server's flag, except that a
    /// truncated page keeps the listing open and an empty page always ends it.
    pub fn accept(&mut self, cursor: Cursor, mut page: Page<T>) -> Result<(), PaginationError> {
        if !self.has_more {
            return Err(PaginationError::Exhausted);
        }
        if cursor != self.next {
            return Err(PaginationError::OutOfOrder {
                expected: self.next,
                got: cursor,
            });
        }

        let truncated = page.items.len() > self.page_size;
        if truncated {
            tracing::warn!(
                received = page.items.len(),
                page_size = self.page_size,
                "Server returned more rows than requested; truncating"
            );
            page.items.truncate(self.page_size);
        }

        let received = page.items.len();
        self.has_more = (page.has_more || truncated) && received > 0;
        self.items.extend(page.items);
        self.next = cursor.advance(received);
        self.pages_loaded += 1;
        Ok(())
    }

    /// Cursor of the next page, `None` once the listing is complete.
    pub fn next_cursor(&self) -> Option<Cursor> {
        self.has_more.then_some(self.next)
    }

    /// Furthest position reached; never decreases.
    pub fn position(&self) -> u32 {
        self.next.position()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pages_loaded(&self) -> u32 {
        self.pages_loaded
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, has_more: bool) -> Page<u32> {
        Page { items, has_more }
    }

    #[test]
    fn test_page_cursor_advances_by_one() {
        let mut p = Paginated::new(Cursor::Page(1), 2);
        p.accept(Cursor::Page(1), page(vec![1, 2], true)).unwrap();
        assert_eq!(p.next_cursor(), Some(Cursor::Page(2)));
        p.accept(Cursor::Page(2), page(vec![3], false)).unwrap();
        assert_eq!(p.items(), &[1, 2, 3]);
        assert_eq!(p.next_cursor(), None);
        assert_eq!(p.pages_loaded(), 2);
    }

    #[test]
    fn test_offset_cursor_advances_by_rows() {
        let mut p = Paginated::new(Cursor::Offset(0), 20);
        p.accept(Cursor::Offset(0), page(vec![1, 2, 3], true)).unwrap();
        assert_eq!(p.next_cursor(), Some(Cursor::Offset(3)));
    }

    #[test]
    fn test_oversized_page_is_truncated() {
        let mut p = Paginated::new(Cursor::Page(1), 2);
        p.accept(Cursor::Page(1), page(vec![1, 2, 3, 4], true)).unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_page_truncate_marks_more() {
        let mut p = page(vec![1, 2, 3], false);
        p.truncate(3);
        assert!(!p.has_more);
        p.truncate(2);
        assert_eq!(p, page(vec![1, 2], true));
    }

    #[test]
    fn test_truncated_last_page_keeps_listing_open() {
        let mut p = Paginated::new(Cursor::Offset(0), 2);
        p.accept(Cursor::Offset(0), page(vec![1, 2, 3], false)).unwrap();
        assert_eq!(p.items(), &[1, 2]);
        assert!(p.has_more());
        assert_eq!(p.next_cursor(), Some(Cursor::Offset(2)));

        p.accept(Cursor::Offset(2), page(vec![3], false)).unwrap();
        assert_eq!(p.items(), &[1, 2, 3]);
        assert_eq!(p.next_cursor(), None);
    }

    #[test]
    fn test_empty_page_ends_listing_even_if_server_says_more() {
        let mut p = Paginated::new(Cursor::Page(1), 10);
        p.accept(Cursor::Page(1), page(vec![], true)).unwrap();
        assert!(!p.has_more());
        assert_eq!(
            p.accept(Cursor::Page(2), page(vec![1], false)),
            Err(PaginationError::Exhausted)
        );
    }

    #[test]
    fn test_stale_page_cannot_rewind() {
        let mut p = Paginated::new(Cursor::Page(1), 1);
        p.accept(Cursor::Page(1), page(vec![1], true)).unwrap();
        p.accept(Cursor::Page(2), page(vec![2], true)).unwrap();
        let before = p.position();
        let err = p.accept(Cursor::Page(1), page(vec![9], true)).unwrap_err();
        assert!(matches!(err, PaginationError::OutOfOrder { .. }));
        assert_eq!(p.position(), before);
        assert_eq!(p.items(), &[1, 2]);
    }
}
