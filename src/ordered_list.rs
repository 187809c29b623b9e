//! A list kept sorted in ascending order.
//!
//! The tree builder needs a priority structure whose pop order is exactly
//! the total order on nodes, with no heap-internal reordering of ties, so
//! independently built trees come out structurally identical. A sorted
//! `Vec` with ordered insertion gives that directly; the O(n) shift is
//! irrelevant at a 256-symbol alphabet.

use crate::error::{Error, Result};

/// A container whose elements are always in ascending order
#[derive(Debug, Clone, Default)]
pub struct OrderedList<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> OrderedList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        OrderedList { items: Vec::new() }
    }

    /// Inserts an item at the position that preserves ascending order
    pub fn add(&mut self, item: T) {
        let pos = match self.items.binary_search(&item) {
            Ok(pos) | Err(pos) => pos,
        };
        self.items.insert(pos, item);
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the list is empty.
    pub fn pop_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        Ok(self.items.remove(0))
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
