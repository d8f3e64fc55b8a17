//! Sort engine: five interchangeable in-place strategies over a rank range.
//!
//! Every strategy obeys the same contract: after running, the range is
//! non-decreasing under `<` and holds the same multiset of elements it
//! started with. They differ in cost, stability, and use of randomness,
//! so callers benchmarking or teaching with this container can pick one
//! explicitly; everything else goes through the default.
//!
//! # Strategy summary
//!
//! | Strategy    | Complexity                  | Stable | Randomized |
//! |-------------|-----------------------------|--------|------------|
//! | `Bubble`    | O(n²)                       | yes    | no         |
//! | `Selection` | O(n²)                       | no     | no         |
//! | `Merge`     | O(n log n)                  | yes    | no         |
//! | `Quick`     | O(n log n) avg, O(n²) worst | no     | yes        |
//! | `Heap`      | O(n log n)                  | no     | no         |

use super::RankVec;

use rand::Rng;

/// Selects which in-place sorting algorithm
/// [`RankVec::sort_range_with`] runs.
///
/// The default is [`SortStrategy::Merge`], which is also what the
/// whole-container [`RankVec::sort`] uses: it is the only O(n log n)
/// strategy that is both stable and deterministic, which the container
/// relies on internally (a sorted container feeds
/// [`RankVec::uniquify`](crate::RankVec::uniquify) and
/// [`RankVec::search`](crate::RankVec::search)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Repeated adjacent-pair passes. The scan's upper bound narrows by
    /// one after every completed pass whether or not that pass swapped;
    /// passes stop only once an entire pass performs zero swaps. Stable.
    Bubble,
    /// Repeatedly swaps the maximum of the unprocessed prefix to the
    /// current end. Not stable.
    Selection,
    /// Recursive midpoint split with a buffered merge; ties favor the
    /// left half, preserving the input order of equal keys. Stable.
    #[default]
    Merge,
    /// Randomized quicksort: a uniformly random pivot is swapped to the
    /// front, then a Hoare-style inward two-pointer partition splits the
    /// range. Randomization defends against adversarial or already-sorted
    /// worst cases. Not stable.
    Quick,
    /// Builds a max-heap over the range, then repeatedly extracts the
    /// maximum to the current end. Not stable.
    Heap,
}

impl<T: Ord> RankVec<T> {
    /// Sorts the whole container ascending with the default strategy
    /// ([`SortStrategy::Merge`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::RankVec;
    ///
    /// let mut vector = RankVec::from_slice(&[5, 1, 4, 2, 3]);
    /// vector.sort();
    /// assert_eq!(vector.as_slice(), [1, 2, 3, 4, 5]);
    /// assert_eq!(vector.disordered(), 0);
    /// ```
    #[inline]
    pub fn sort(&mut self) {
        let hi = self.len();
        self.sort_range(0, hi);
    }

    /// Sorts the ranks `[lo, hi)` ascending with the default strategy
    /// ([`SortStrategy::Merge`]).
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > len()`.
    #[inline]
    pub fn sort_range(&mut self, lo: usize, hi: usize) {
        self.sort_range_with(lo, hi, SortStrategy::Merge);
    }

    /// Sorts the ranks `[lo, hi)` ascending with the chosen strategy.
    ///
    /// [`SortStrategy::Quick`] draws its pivots from [`rand::thread_rng`];
    /// use [`sort_range_with_rng`](Self::sort_range_with_rng) to supply a
    /// seeded generator instead.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankvec::{RankVec, SortStrategy};
    ///
    /// let mut vector = RankVec::from_slice(&[9, 2, 6, 2, 0]);
    /// vector.sort_range_with(1, 4, SortStrategy::Heap);
    /// assert_eq!(vector.as_slice(), [9, 2, 2, 6, 0]);
    /// ```
    pub fn sort_range_with(&mut self, lo: usize, hi: usize, strategy: SortStrategy) {
        self.sort_range_with_rng(lo, hi, strategy, &mut rand::thread_rng());
    }

    /// Sorts the ranks `[lo, hi)` ascending with the chosen strategy and
    /// the given random-number source.
    ///
    /// Only [`SortStrategy::Quick`] consumes randomness; for the other
    /// strategies the generator is untouched. A seeded generator makes
    /// quicksort's behavior reproducible in tests.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > len()`.
    pub fn sort_range_with_rng<R: Rng>(
        &mut self,
        lo: usize,
        hi: usize,
        strategy: SortStrategy,
        rng: &mut R,
    ) {
        self.check_range(lo, hi);
        match strategy {
            SortStrategy::Bubble => bubble_sort(&mut self.as_mut_slice()[lo..hi]),
            SortStrategy::Selection => selection_sort(&mut self.as_mut_slice()[lo..hi]),
            SortStrategy::Merge => merge_sort(self.storage_mut().slots_mut(), lo, hi),
            SortStrategy::Quick => quick_sort(&mut self.as_mut_slice()[lo..hi], rng),
            SortStrategy::Heap => heap_sort(&mut self.as_mut_slice()[lo..hi]),
        }
    }
}

// =============================================================================
// Bubble
// =============================================================================

/// Adjacent-pair passes until a pass performs no swap.
///
/// The scan bound narrows by exactly one per completed pass, never by the
/// position of the last swap; this is long-observed behavior of this
/// container and is kept as-is. On already-sorted input the first pass is
/// clean, so exactly `len - 1` comparisons happen.
fn bubble_sort<T: Ord>(range: &mut [T]) {
    let mut hi = range.len();
    loop {
        let mut swapped = false;
        for rank in 1..hi {
            if range[rank - 1] > range[rank] {
                range.swap(rank - 1, rank);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
        hi -= 1;
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Repeatedly swaps the maximum of `[0, end]` to rank `end`.
///
/// The scan keeps the earliest maximum on ties, but the unconditional
/// swap at the end of each pass can still reorder equal keys.
fn selection_sort<T: Ord>(range: &mut [T]) {
    let mut end = range.len();
    while end > 1 {
        end -= 1;
        let mut max = 0;
        for rank in 1..=end {
            if range[max] < range[rank] {
                max = rank;
            }
        }
        range.swap(max, end);
    }
}

// =============================================================================
// Merge
// =============================================================================

/// Recursive midpoint split over `slots[lo..hi]`.
///
/// The range is moved out into a scratch buffer and merged back, so the
/// element type needs no `Clone`; ties emit the left-half element first,
/// which is what makes the strategy stable.
fn merge_sort<T: Ord>(slots: &mut Vec<T>, lo: usize, hi: usize) {
    let taken: Vec<T> = slots.drain(lo..hi).collect();
    let sorted = merge_halves(taken);
    slots.splice(lo..lo, sorted);
}

fn merge_halves<T: Ord>(elements: Vec<T>) -> Vec<T> {
    if elements.len() < 2 {
        return elements;
    }
    let mut left = elements;
    let right = left.split_off(left.len() / 2);
    merge(merge_halves(left), merge_halves(right))
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        match (left.peek(), right.peek()) {
            // left <= right keeps equal keys in input order
            (Some(from_left), Some(from_right)) => {
                if from_left <= from_right {
                    merged.extend(left.next());
                } else {
                    merged.extend(right.next());
                }
            }
            (Some(_), None) => merged.extend(left.next()),
            (None, Some(_)) => merged.extend(right.next()),
            (None, None) => return merged,
        }
    }
}

// =============================================================================
// Quick
// =============================================================================

/// Randomized quicksort; recursion splits around the returned pivot rank.
fn quick_sort<T: Ord, R: Rng>(range: &mut [T], rng: &mut R) {
    if range.len() < 2 {
        return;
    }
    let pivot = partition(range, rng);
    let (left, right) = range.split_at_mut(pivot);
    quick_sort(left, rng);
    quick_sort(&mut right[1..], rng);
}

/// Swaps a uniformly random element to the front as the pivot, then
/// partitions with two inward-scanning pointers. Each swap moves one
/// out-of-place element from each side across the boundary.
///
/// On return the pivot sits at the returned rank, everything left of it
/// compares `<=` and everything right of it compares `>=`.
fn partition<T: Ord, R: Rng>(range: &mut [T], rng: &mut R) -> usize {
    range.swap(0, rng.gen_range(0..range.len()));
    let mut lo = 1;
    let mut hi = range.len();
    loop {
        while lo < hi && range[lo] <= range[0] {
            lo += 1;
        }
        while lo < hi && range[hi - 1] >= range[0] {
            hi -= 1;
        }
        if lo >= hi {
            break;
        }
        range.swap(lo, hi - 1);
        lo += 1;
        hi -= 1;
    }
    range.swap(0, lo - 1);
    lo - 1
}

// =============================================================================
// Heap
// =============================================================================

/// Floyd heap construction followed by repeated extract-max.
fn heap_sort<T: Ord>(range: &mut [T]) {
    for root in (0..range.len() / 2).rev() {
        sift_down(range, root);
    }
    for end in (1..range.len()).rev() {
        range.swap(0, end);
        sift_down(&mut range[..end], 0);
    }
}

/// Restores the max-heap property below `root`, assuming both subtrees
/// already are heaps.
fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= heap.len() {
            return;
        }
        let mut largest = if heap[root] < heap[left] { left } else { root };
        let right = left + 1;
        if right < heap.len() && heap[largest] < heap[right] {
            largest = right;
        }
        if largest == root {
            return;
        }
        heap.swap(root, largest);
        root = largest;
    }
}
