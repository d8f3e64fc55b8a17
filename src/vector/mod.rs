//! Growable, rank-indexed sequence container.
//!
//! This module provides [`RankVec`], a resizable ordered collection of
//! homogeneous elements with amortized capacity management, searching,
//! five interchangeable in-place sort strategies, deduplication,
//! shuffling, and closure-based traversal.
//!
//! # Overview
//!
//! `RankVec` addresses elements by *rank*: the zero-based position within
//! the container. The backing buffer doubles when it fills and halves when
//! the load factor (`len / capacity`) drops to 25% or below, so a sequence
//! of `n` appends costs O(n) total and a mostly-empty container does not
//! pin memory. Capacity starts at [`MIN_CAPACITY`](crate::MIN_CAPACITY)
//! and the observable growth sequence from there is 3, 6, 12, 24, ….
//!
//! # Time Complexity
//!
//! | Operation          | Complexity               |
//! |--------------------|--------------------------|
//! | `len` / `is_empty` | O(1)                     |
//! | `get` / indexing   | O(1)                     |
//! | `push`             | amortized O(1)           |
//! | `insert(rank, _)`  | O(len − rank)            |
//! | `remove`           | O(len − rank)            |
//! | `find`             | O(hi − lo)               |
//! | `search`           | O(log (hi − lo))         |
//! | `sort`             | strategy-dependent       |
//! | `deduplicate`      | O(len²)                  |
//! | `uniquify`         | O(len)                   |
//! | `unsort`           | O(hi − lo)               |
//!
//! # Examples
//!
//! ```rust
//! use rankvec::RankVec;
//!
//! let mut vector: RankVec<i32> = RankVec::new();
//! vector.push(5);
//! vector.push(1);
//! vector.push(3);
//!
//! vector.sort();
//! assert_eq!(vector.as_slice(), [1, 3, 5]);
//! assert_eq!(vector.search(&4), Some(1)); // rightmost element <= 4
//! ```

mod maintain;
mod search;
mod sort;

pub use sort::SortStrategy;

use crate::storage::{MIN_CAPACITY, Storage};

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

/// A growable, rank-indexed sequence container.
///
/// Elements are kept contiguously in rank order. Mutations that change the
/// length may resize the backing buffer; any reference obtained before such
/// a mutation cannot be held across it (the borrow checker enforces this).
///
/// The only requirements ever placed on the element type are comparison
/// bounds (`PartialEq` for searching and deduplication, `Ord` for sorting)
/// and `Clone` for the copying constructors.
///
/// # Examples
///
/// ```rust
/// use rankvec::RankVec;
///
/// let mut vector = RankVec::from_slice(&[2, 7, 2, 9]);
/// assert_eq!(vector.len(), 4);
/// assert_eq!(vector[1], 7);
///
/// vector.insert(1, 5);
/// assert_eq!(vector.as_slice(), [2, 5, 7, 2, 9]);
///
/// let removed = vector.remove(3);
/// assert_eq!(removed, 2);
/// ```
pub struct RankVec<T> {
    storage: Storage<T>,
}

impl<T> RankVec<T> {
    /// Creates an empty container with capacity
    /// [`MIN_CAPACITY`](crate::MIN_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::{MIN_CAPACITY, RankVec};
    ///
    /// let vector: RankVec<i32> = RankVec::new();
    /// assert!(vector.is_empty());
    /// assert_eq!(vector.capacity(), MIN_CAPACITY);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty container with at least the given capacity.
    ///
    /// Capacities below [`MIN_CAPACITY`](crate::MIN_CAPACITY) are clamped
    /// up to it.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Storage::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Returns the current capacity of the backing buffer.
    ///
    /// The capacity is always at least [`MIN_CAPACITY`](crate::MIN_CAPACITY)
    /// and at least `len()`.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns a reference to the element at `rank`, or `None` if the rank
    /// is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&T> {
        self.storage.as_slice().get(rank)
    }

    /// Returns a mutable reference to the element at `rank`, or `None` if
    /// the rank is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, rank: usize) -> Option<&mut T> {
        self.storage.as_mut_slice().get_mut(rank)
    }

    /// Views the live elements as a slice in rank order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Views the live elements as a mutable slice in rank order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Inserts `element` at `rank`, shifting every element at a rank
    /// greater than or equal to `rank` one slot right.
    ///
    /// Expands the backing buffer first when it is full. O(len − rank).
    ///
    /// # Panics
    ///
    /// Panics if `rank > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let mut vector = RankVec::from_slice(&[1, 3]);
    /// vector.insert(1, 2);
    /// assert_eq!(vector.as_slice(), [1, 2, 3]);
    /// ```
    pub fn insert(&mut self, rank: usize, element: T) {
        assert!(
            rank <= self.len(),
            "insert rank {rank} out of bounds for length {}",
            self.len()
        );
        self.storage.insert(rank, element);
    }

    /// Appends `element` at the end. Equivalent to `insert(len(), element)`.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.storage.insert(self.storage.len(), element);
    }

    /// Removes and returns the element at `rank`, shifting the tail left
    /// and shrinking the backing buffer when the load factor allows.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= len()`.
    pub fn remove(&mut self, rank: usize) -> T {
        assert!(
            rank < self.len(),
            "remove rank {rank} out of bounds for length {}",
            self.len()
        );
        self.storage.remove(rank)
    }

    /// Removes the elements in `[lo, hi)`, shifting the tail left by
    /// `hi - lo`, and returns the number removed.
    ///
    /// `lo == hi` is a no-op returning 0. Shrinks the backing buffer when
    /// the load factor allows.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let mut vector = RankVec::from_slice(&[1, 2, 3, 4, 5]);
    /// assert_eq!(vector.remove_range(1, 4), 3);
    /// assert_eq!(vector.as_slice(), [1, 5]);
    /// assert_eq!(vector.remove_range(1, 1), 0);
    /// ```
    pub fn remove_range(&mut self, lo: usize, hi: usize) -> usize {
        self.check_range(lo, hi);
        self.storage.remove_range(lo, hi)
    }

    /// Returns an iterator over the elements in rank order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.as_slice().iter()
    }

    /// Returns an iterator yielding mutable references in rank order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.storage.as_mut_slice().iter_mut()
    }

    /// Shared bounds check for every range-taking operation.
    ///
    /// # Panics
    ///
    /// Panics unless `lo <= hi <= len()`.
    #[inline]
    pub(crate) fn check_range(&self, lo: usize, hi: usize) {
        assert!(
            lo <= hi && hi <= self.len(),
            "range [{lo}, {hi}) out of bounds for length {}",
            self.len()
        );
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Storage<T> {
        &mut self.storage
    }
}

impl<T: Clone> RankVec<T> {
    /// Creates a container holding `count` clones of `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let vector = RankVec::filled(4, 9);
    /// assert_eq!(vector.as_slice(), [9, 9, 9, 9]);
    /// ```
    #[must_use]
    pub fn filled(count: usize, element: T) -> Self {
        let mut storage = Storage::with_capacity(count);
        storage.fill(count, &element);
        Self { storage }
    }

    /// Creates a container by copying a contiguous range of elements.
    ///
    /// The new capacity is twice the source length (clamped to
    /// [`MIN_CAPACITY`](crate::MIN_CAPACITY)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let vector = RankVec::from_slice(&[1, 2, 3]);
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.capacity(), 6);
    /// ```
    #[must_use]
    pub fn from_slice(source: &[T]) -> Self {
        Self {
            storage: Storage::from_slice(source),
        }
    }

    /// Creates a new container by deep-copying the ranks `[lo, hi)` of this
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let vector = RankVec::from_slice(&[1, 2, 3, 4]);
    /// let middle = vector.copy_range(1, 3);
    /// assert_eq!(middle.as_slice(), [2, 3]);
    /// ```
    #[must_use]
    pub fn copy_range(&self, lo: usize, hi: usize) -> Self {
        self.check_range(lo, hi);
        Self::from_slice(&self.as_slice()[lo..hi])
    }
}

impl<T: Clone> Clone for RankVec<T> {
    /// Deep-copies the live range into a freshly sized buffer; the copy
    /// shares nothing with the original.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<T> Default for RankVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RankVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for RankVec<T> {
    /// Containers are equal when they hold equal elements in the same rank
    /// order; capacity does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for RankVec<T> {}

impl<T> Index<usize> for RankVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `rank >= len()`.
    #[inline]
    fn index(&self, rank: usize) -> &T {
        &self.as_slice()[rank]
    }
}

impl<T> IndexMut<usize> for RankVec<T> {
    /// # Panics
    ///
    /// Panics if `rank >= len()`.
    #[inline]
    fn index_mut(&mut self, rank: usize) -> &mut T {
        &mut self.as_mut_slice()[rank]
    }
}

impl<T> FromIterator<T> for RankVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: Storage::from_vec(iter.into_iter().collect()),
        }
    }
}

impl<T> Extend<T> for RankVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> IntoIterator for RankVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_vec().into_iter()
    }
}

impl<'element, T> IntoIterator for &'element RankVec<T> {
    type Item = &'element T;
    type IntoIter = slice::Iter<'element, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'element, T> IntoIterator for &'element mut RankVec<T> {
    type Item = &'element mut T;
    type IntoIter = slice::IterMut<'element, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
