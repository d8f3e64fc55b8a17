//! Owned backing buffer with a doubling/halving capacity policy.
//!
//! [`Storage`] is the arena behind [`RankVec`](crate::RankVec). It keeps the
//! live elements in a `Vec<T>` whose length is the container's size, and a
//! separate policy capacity that grows by doubling and shrinks by halving.
//! The policy capacity is what the container reports and what every growth
//! and shrink decision is made against; the `Vec`'s own allocation merely
//! has to be large enough to hold the live elements.
//!
//! Reallocation is construct-then-replace: the replacement buffer is fully
//! populated before the old one is dropped, so no half-valid intermediate
//! state is ever observable.

/// Smallest capacity the buffer ever reports.
///
/// Every constructor clamps to this value, and [`Storage::shrink`] never
/// goes below `2 * MIN_CAPACITY`.
pub const MIN_CAPACITY: usize = 3;

/// The owned backing buffer of a [`RankVec`](crate::RankVec).
///
/// Invariants, upheld by every method:
/// - `slots.len() <= capacity`
/// - `capacity >= MIN_CAPACITY`
pub(crate) struct Storage<T> {
    /// Live elements; `slots.len()` is the container's size.
    slots: Vec<T>,
    /// Policy capacity. May exceed the `Vec`'s real allocation after
    /// `clone_from`; the `Vec` catches up lazily on insertion.
    capacity: usize,
}

impl<T> Storage<T> {
    /// Creates an empty buffer with the given capacity, clamped to
    /// [`MIN_CAPACITY`].
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Wraps an existing `Vec`, reporting a capacity of at least its length.
    pub(crate) fn from_vec(slots: Vec<T>) -> Self {
        let capacity = slots.len().max(MIN_CAPACITY);
        Self { slots, capacity }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Direct access to the element `Vec` for operations that need to move
    /// elements out and back (merge sort's scratch buffer). Callers must
    /// leave the length unchanged.
    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut Vec<T> {
        &mut self.slots
    }

    #[inline]
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots
    }

    /// Doubles the capacity if the buffer is full.
    ///
    /// Called immediately before any insertion; a no-op while there is
    /// room. The new capacity is `max(capacity, MIN_CAPACITY) * 2`.
    pub(crate) fn expand(&mut self) {
        if self.slots.len() < self.capacity {
            return;
        }
        let doubled = self.capacity.max(MIN_CAPACITY) * 2;
        self.reallocate(doubled);
    }

    /// Halves the capacity when the load factor drops to 25% or below.
    ///
    /// Called after every removal. The capacity never drops below
    /// `2 * MIN_CAPACITY`, so a buffer already at that floor is left alone.
    pub(crate) fn shrink(&mut self) {
        let floor = MIN_CAPACITY * 2;
        if self.capacity <= floor {
            return;
        }
        if self.slots.len() * 4 > self.capacity {
            return;
        }
        self.reallocate((self.capacity / 2).max(floor));
    }

    /// Moves every element, in order, into a freshly allocated buffer of
    /// the given capacity. The old buffer is dropped only after the
    /// replacement holds all elements.
    fn reallocate(&mut self, capacity: usize) {
        let mut replacement = Vec::with_capacity(capacity);
        replacement.append(&mut self.slots);
        self.slots = replacement;
        self.capacity = capacity;
    }

    /// Inserts at `rank`, expanding first if the buffer is full.
    pub(crate) fn insert(&mut self, rank: usize, element: T) {
        self.expand();
        self.slots.insert(rank, element);
    }

    /// Removes and returns the element at `rank`, then considers shrinking.
    pub(crate) fn remove(&mut self, rank: usize) -> T {
        let element = self.slots.remove(rank);
        self.shrink();
        element
    }

    /// Removes `[lo, hi)`, shifting the tail left, then considers
    /// shrinking. Returns the number of elements removed; `lo == hi` is a
    /// no-op returning 0.
    pub(crate) fn remove_range(&mut self, lo: usize, hi: usize) -> usize {
        if lo == hi {
            return 0;
        }
        self.slots.drain(lo..hi);
        self.shrink();
        hi - lo
    }

    /// Drops every element past `len` without touching the capacity.
    /// `uniquify` truncates and then calls [`Storage::shrink`] itself.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.slots.truncate(len);
    }
}

impl<T: Clone> Storage<T> {
    /// Copies a range of elements into a fresh buffer with capacity twice
    /// the range length (clamped to [`MIN_CAPACITY`]).
    pub(crate) fn from_slice(source: &[T]) -> Self {
        let mut storage = Self::with_capacity(source.len() * 2);
        storage.slots.extend_from_slice(source);
        storage
    }

    /// Extends with `count` clones of `element`.
    pub(crate) fn fill(&mut self, count: usize, element: &T) {
        for _ in 0..count {
            self.expand();
            self.slots.push(element.clone());
        }
    }
}

impl<T: Clone> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Self::from_slice(&self.slots)
    }

    /// Deep-copies `source` into `self`, reusing the destination's
    /// allocation where the element type allows it. The capacity is
    /// recomputed with the same rule as [`Storage::from_slice`].
    fn clone_from(&mut self, source: &Self) {
        self.slots.clone_from(&source.slots);
        self.capacity = (source.slots.len() * 2).max(MIN_CAPACITY);
    }
}
