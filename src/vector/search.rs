//! Searching: unordered linear scan and ordered predecessor search.
//!
//! Misses are reported as `None` rather than the sentinel ranks a manual
//! implementation would use (`-1`, one-below-`lo`).

use super::RankVec;

impl<T: PartialEq> RankVec<T> {
    /// Finds `element` anywhere in the container.
    ///
    /// Equivalent to [`find_in`](Self::find_in) over `[0, len())`.
    #[inline]
    #[must_use]
    pub fn find(&self, element: &T) -> Option<usize> {
        self.find_in(element, 0, self.len())
    }

    /// Finds `element` in `[lo, hi)`, scanning from the high end downward.
    ///
    /// Returns the rank of the last (highest-rank) match, or `None` if the
    /// range holds no equal element. O(hi − lo).
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
    /// let vector = RankVec::from_slice(&[4, 7, 4, 9]);
    /// assert_eq!(vector.find(&4), Some(2));
    /// assert_eq!(vector.find_in(&4, 0, 2), Some(0));
    /// assert_eq!(vector.find(&5), None);
    /// ```
    #[must_use]
    pub fn find_in(&self, element: &T, lo: usize, hi: usize) -> Option<usize> {
        self.check_range(lo, hi);
        self.as_slice()[lo..hi]
            .iter()
            .rposition(|candidate| candidate == element)
            .map(|offset| lo + offset)
    }
}

impl<T: Ord> RankVec<T> {
    /// Predecessor search over the whole container.
    ///
    /// Equivalent to [`search_in`](Self::search_in) over `[0, len())`.
    #[inline]
    #[must_use]
    pub fn search(&self, element: &T) -> Option<usize> {
        self.search_in(element, 0, self.len())
    }

    /// Predecessor search in the sorted range `[lo, hi)`.
    ///
    /// Returns the rank of the rightmost element less than or equal to
    /// `element`, or `None` when every element in the range exceeds it.
    /// The rank to insert `element` at while keeping the range sorted is
    /// therefore `search_in(element, lo, hi).map_or(lo, |rank| rank + 1)`.
    ///
    /// Binary search: at each step the midpoint is compared against
    /// `element`; `element < mid` narrows the upper bound to the midpoint,
    /// anything else narrows the lower bound to one past it. O(log (hi − lo)).
    ///
    /// The range must be sorted ascending; on an unsorted range the result
    /// is unspecified (but never out of `[lo, hi)`).
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
    /// let vector = RankVec::from_slice(&[1, 3, 5, 7]);
    /// assert_eq!(vector.search(&4), Some(1)); // 3 is the predecessor
    /// assert_eq!(vector.search(&7), Some(3)); // exact matches included
    /// assert_eq!(vector.search(&0), None);    // everything exceeds 0
    /// ```
    #[must_use]
    pub fn search_in(&self, element: &T, lo: usize, hi: usize) -> Option<usize> {
        self.check_range(lo, hi);
        let elements = self.as_slice();
        let floor = lo;
        let mut lo = lo;
        let mut hi = hi;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if element < &elements[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        if lo > floor { Some(lo - 1) } else { None }
    }

    /// Counts adjacent inversions: pairs of neighboring ranks whose
    /// elements are out of order. Zero if and only if the container is
    /// sorted ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let vector = RankVec::from_slice(&[3, 1, 2]);
    /// assert_eq!(vector.disordered(), 1);
    ///
    /// let sorted = RankVec::from_slice(&[1, 2, 3]);
    /// assert_eq!(sorted.disordered(), 0);
    /// ```
    #[must_use]
    pub fn disordered(&self) -> usize {
        self.as_slice()
            .windows(2)
            .filter(|pair| pair[0] > pair[1])
            .count()
    }
}
