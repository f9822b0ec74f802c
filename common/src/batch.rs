//! # Bounded Batch
//!
//! An ordered container holding at most a fixed number of elements.
//!
//! Insertion order is preserved and duplicates are allowed. Once the batch
//! is full, further pushes are rejected through the boolean result of
//! [`Batch::try_push`] rather than an error: running out of room is a
//! normal outcome callers are expected to check for.

use std::fmt::{Display, Write as _};

/// Ordered sequence capped at `capacity` elements.
#[derive(Debug, Clone)]
pub struct Batch<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T> Batch<T> {
    /// Creates an empty batch that will accept up to `capacity` elements.
    ///
    /// The capacity is fixed for the lifetime of the batch.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Maximum number of elements this batch will ever hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements that can still be pushed.
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Appends `item` at the end if there is room left.
    ///
    /// Returns `false` and leaves the batch untouched when it is full.
    pub fn try_push(&mut self, item: T) -> bool {
        if self.items.len() < self.capacity {
            self.items.push(item);
            return true;
        }
        false
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Display> Batch<T> {
    /// Concatenates the display form of every element, each followed by
    /// `", "`.
    ///
    /// The separator also trails the last element; an empty batch renders
    /// as the empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            let _ = write!(out, "{item}, ");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_capacity() {
        let mut batch: Batch<u32> = Batch::with_capacity(3);
        let accepted: Vec<bool> = (0..5).map(|n| batch.try_push(n)).collect();

        assert_eq!(accepted, vec![true, true, true, false, false]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.items(), &[0, 1, 2]);
    }

    #[test]
    fn rejected_push_leaves_contents_unchanged() {
        let mut batch: Batch<&str> = Batch::with_capacity(1);

        assert!(batch.try_push("kept"));
        assert!(!batch.try_push("dropped"));
        assert_eq!(batch.items(), &["kept"]);
        assert_eq!(batch.remaining(), 0);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut batch: Batch<u32> = Batch::with_capacity(0);

        assert!(!batch.try_push(1));
        assert!(batch.is_empty());
        assert_eq!(batch.render(), "");
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let mut batch: Batch<u32> = Batch::with_capacity(4);
        for n in [7, 7, 1, 7] {
            assert!(batch.try_push(n));
        }

        assert_eq!(batch.into_items(), vec![7, 7, 1, 7]);
    }

    #[test]
    fn render_keeps_trailing_separator() {
        let mut batch: Batch<&str> = Batch::with_capacity(4);
        for item in ["a", "b", "c"] {
            assert!(batch.try_push(item));
        }

        assert_eq!(batch.render(), "a, b, c, ");
    }

    #[test]
    fn render_empty_is_empty_string() {
        let batch: Batch<String> = Batch::with_capacity(8);
        assert_eq!(batch.render(), "");
    }
}
