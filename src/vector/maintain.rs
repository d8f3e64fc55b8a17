//! Maintenance: deduplication, shuffling, and visitor traversal.

use super::RankVec;

use rand::Rng;

impl<T: PartialEq> RankVec<T> {
    /// Removes every element that duplicates an earlier one, keeping the
    /// first occurrence. Works on unsorted contents.
    ///
    /// For each rank from 1 upward, the element is removed if an equal one
    /// exists at a lower rank, otherwise the scan advances. Returns the
    /// number removed. O(len²) from the repeated linear scans; on sorted
    /// contents prefer [`uniquify`](Self::uniquify).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let mut vector = RankVec::from_slice(&[1, 2, 1, 3, 2]);
    /// assert_eq!(vector.deduplicate(), 2);
    /// assert_eq!(vector.as_slice(), [1, 2, 3]);
    /// ```
    pub fn deduplicate(&mut self) -> usize {
        let original = self.len();
        let mut rank = 1;
        while rank < self.len() {
            if self.find_in(&self[rank], 0, rank).is_some() {
                self.remove(rank);
            } else {
                rank += 1;
            }
        }
        original - self.len()
    }

    /// Collapses runs of equal elements, keeping one of each.
    ///
    /// The contents must be sorted ascending (equal elements adjacent);
    /// call [`sort`](Self::sort) first if unsure. A single forward pass
    /// keeps each element that differs from the last retained one, then
    /// truncates and lets the backing buffer shrink. Returns the number
    /// removed. O(len).
    ///
    /// On unsorted contents only adjacent duplicates are collapsed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let mut vector = RankVec::from_slice(&[1, 1, 2, 2, 3]);
    /// assert_eq!(vector.uniquify(), 2);
    /// assert_eq!(vector.as_slice(), [1, 2, 3]);
    /// ```
    pub fn uniquify(&mut self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let original = self.len();
        let slots = self.as_mut_slice();
        let mut retained = 0;
        for probe in 1..slots.len() {
            if slots[retained] != slots[probe] {
                retained += 1;
                slots.swap(retained, probe);
            }
        }
        let storage = self.storage_mut();
        storage.truncate(retained + 1);
        storage.shrink();
        original - self.len()
    }
}

impl<T> RankVec<T> {
    /// Shuffles the whole container. Equivalent to
    /// [`unsort_range`](Self::unsort_range) over `[0, len())`.
    #[inline]
    pub fn unsort(&mut self) {
        let hi = self.len();
        self.unsort_range(0, hi);
    }

    /// Shuffles the ranks `[lo, hi)` into a uniformly random permutation
    /// using [`rand::thread_rng`].
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > len()`.
    #[inline]
    pub fn unsort_range(&mut self, lo: usize, hi: usize) {
        self.unsort_range_with_rng(lo, hi, &mut rand::thread_rng());
    }

    /// Shuffles the ranks `[lo, hi)` with the given random-number source.
    ///
    /// Fisher–Yates: walking the range from the top, each slot is swapped
    /// with a uniformly drawn slot at or below it, so every permutation is
    /// equally likely given an unbiased generator. A seeded generator
    /// makes the permutation reproducible in tests.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rankvec::RankVec;
    ///
    /// let mut vector = RankVec::from_slice(&[1, 2, 3, 4, 5]);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// vector.unsort_range_with_rng(0, 5, &mut rng);
    ///
    /// let mut restored = vector.clone();
    /// restored.sort();
    /// assert_eq!(restored.as_slice(), [1, 2, 3, 4, 5]);
    /// ```
    pub fn unsort_range_with_rng<R: Rng>(&mut self, lo: usize, hi: usize, rng: &mut R) {
        self.check_range(lo, hi);
        let range = &mut self.as_mut_slice()[lo..hi];
        for remaining in (1..range.len()).rev() {
            let chosen = rng.gen_range(0..=remaining);
            range.swap(remaining, chosen);
        }
    }

    /// Visits every element once, in ascending rank order, read-only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let vector = RankVec::from_slice(&[1, 2, 3]);
    /// let mut total = 0;
    /// vector.traverse(|element| total += element);
    /// assert_eq!(total, 6);
    /// ```
    pub fn traverse(&self, mut visit: impl FnMut(&T)) {
        for element in self.as_slice() {
            visit(element);
        }
    }

    /// Visits every element once, in ascending rank order, with mutable
    /// access. The visitor may change element values in place; the
    /// container's length cannot change during the traversal (the visitor
    /// has no access to the container itself).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let mut vector = RankVec::from_slice(&[1, 2, 3]);
    /// vector.traverse_mut(|element| *element *= 10);
    /// assert_eq!(vector.as_slice(), [10, 20, 30]);
    /// ```
    pub fn traverse_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        for element in self.as_mut_slice() {
            visit(element);
        }
    }
}
