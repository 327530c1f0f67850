//! Index rotation over an ordered collection
//!
//! Navigation is non-destructive: items never move, only the index does.

/// Ordered collection with a current position
///
/// Invariant: when the collection is non-empty, `index < items.len()`.
/// An empty carousel has no current item and ignores navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    /// Create a carousel positioned at the first item
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current position, `None` when empty
    pub fn index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    /// Item at the current position
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// All items in rotation order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Move forward by one, wrapping to the start
    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Move backward by one, wrapping to the end
    pub fn prev(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    /// Append an item without moving the current position
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
