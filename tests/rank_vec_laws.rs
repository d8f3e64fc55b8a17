//! Property-based tests for RankVec invariants.
//!
//! Verifies the container's capacity policy, the shared contract of the
//! five sort strategies, and the search/deduplication semantics against
//! straightforward reference models.

use rankvec::{MIN_CAPACITY, RankVec, SortStrategy};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const EVERY_STRATEGY: [SortStrategy; 5] = [
    SortStrategy::Bubble,
    SortStrategy::Selection,
    SortStrategy::Merge,
    SortStrategy::Quick,
    SortStrategy::Heap,
];

// =============================================================================
// Capacity laws
// =============================================================================

proptest! {
    /// Capacity Law: after any push/remove interleaving, the size never
    /// exceeds the capacity and the capacity never drops below the floor.
    #[test]
    fn prop_capacity_bounds_hold(
        operations in prop::collection::vec(prop::option::of(any::<i32>()), 0..200)
    ) {
        let mut vector: RankVec<i32> = RankVec::new();
        for operation in operations {
            match operation {
                Some(element) => vector.push(element),
                None => {
                    if !vector.is_empty() {
                        vector.remove(0);
                    }
                }
            }
            prop_assert!(vector.len() <= vector.capacity());
            prop_assert!(vector.capacity() >= MIN_CAPACITY);
        }
    }

    /// Growth Law: pushing only, every capacity change is an exact
    /// doubling of the previous capacity.
    #[test]
    fn prop_growth_only_doubles(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut vector: RankVec<i32> = RankVec::new();
        let mut previous = vector.capacity();
        for element in elements {
            vector.push(element);
            let current = vector.capacity();
            prop_assert!(current == previous || current == previous * 2);
            previous = current;
        }
    }

    /// Model Law: positional inserts and removals agree with Vec.
    #[test]
    fn prop_insert_remove_matches_vec_model(
        seed_elements in prop::collection::vec(any::<i32>(), 0..20),
        inserts in prop::collection::vec((any::<usize>(), any::<i32>()), 0..20),
        removals in prop::collection::vec(any::<usize>(), 0..20),
    ) {
        let mut vector = RankVec::from_slice(&seed_elements);
        let mut model = seed_elements;

        for (position, element) in inserts {
            let rank = position % (model.len() + 1);
            vector.insert(rank, element);
            model.insert(rank, element);
        }
        for position in removals {
            if model.is_empty() {
                break;
            }
            let rank = position % model.len();
            prop_assert_eq!(vector.remove(rank), model.remove(rank));
        }
        prop_assert_eq!(vector.as_slice(), model.as_slice());
    }
}

// =============================================================================
// Sort laws
// =============================================================================

proptest! {
    /// Agreement Law: all five strategies produce the identical ordered
    /// sequence, equal to the std sort of the same multiset, and
    /// disordered() is zero afterwards.
    #[test]
    fn prop_all_strategies_agree(
        elements in prop::collection::vec(any::<i32>(), 0..60),
        seed in any::<u64>(),
    ) {
        let mut expected = elements.clone();
        expected.sort_unstable();

        for strategy in EVERY_STRATEGY {
            let mut vector = RankVec::from_slice(&elements);
            let hi = vector.len();
            let mut rng = StdRng::seed_from_u64(seed);
            vector.sort_range_with_rng(0, hi, strategy, &mut rng);
            prop_assert_eq!(vector.as_slice(), expected.as_slice());
            prop_assert_eq!(vector.disordered(), 0);
        }
    }

    /// Range Law: sorting a sub-range never touches elements outside it.
    #[test]
    fn prop_range_sort_is_contained(
        elements in prop::collection::vec(any::<i32>(), 2..40),
        bounds in (any::<usize>(), any::<usize>()),
        seed in any::<u64>(),
    ) {
        let lo = bounds.0 % elements.len();
        let hi = lo + bounds.1 % (elements.len() - lo + 1);

        for strategy in EVERY_STRATEGY {
            let mut vector = RankVec::from_slice(&elements);
            let mut rng = StdRng::seed_from_u64(seed);
            vector.sort_range_with_rng(lo, hi, strategy, &mut rng);
            prop_assert_eq!(&vector.as_slice()[..lo], &elements[..lo]);
            prop_assert_eq!(&vector.as_slice()[hi..], &elements[hi..]);

            let mut inner: Vec<i32> = vector.as_slice()[lo..hi].to_vec();
            prop_assert!(inner.windows(2).all(|pair| pair[0] <= pair[1]));
            inner.sort_unstable();
            let mut expected: Vec<i32> = elements[lo..hi].to_vec();
            expected.sort_unstable();
            prop_assert_eq!(inner, expected);
        }
    }
}

// =============================================================================
// Search laws
// =============================================================================

proptest! {
    /// Predecessor Law: search agrees with a linear scan for the
    /// rightmost element at most the query.
    #[test]
    fn prop_search_matches_linear_predecessor(
        mut elements in prop::collection::vec(any::<i32>(), 0..60),
        query in any::<i32>(),
    ) {
        elements.sort_unstable();
        let vector = RankVec::from_slice(&elements);
        let expected = elements.iter().rposition(|element| *element <= query);
        prop_assert_eq!(vector.search(&query), expected);
    }

    /// Membership Law: for any element of a sorted vector, search lands on
    /// an equal element.
    #[test]
    fn prop_search_hits_members(
        mut elements in prop::collection::vec(any::<i32>(), 1..60),
        pick in any::<usize>(),
    ) {
        elements.sort_unstable();
        let vector = RankVec::from_slice(&elements);
        let query = elements[pick % elements.len()];
        let rank = vector.search(&query).expect("a member always has a predecessor");
        prop_assert_eq!(vector[rank], query);
    }

    /// Find Law: find agrees with a reverse linear scan.
    #[test]
    fn prop_find_matches_rposition(
        elements in prop::collection::vec(0..10i32, 0..40),
        query in 0..10i32,
    ) {
        let vector = RankVec::from_slice(&elements);
        let expected = elements.iter().rposition(|element| *element == query);
        prop_assert_eq!(vector.find(&query), expected);
    }
}

// =============================================================================
// Maintenance laws
// =============================================================================

proptest! {
    /// Deduplication Law: deduplicate keeps exactly the distinct values,
    /// first occurrences in their original relative order, and reports the
    /// difference in length.
    #[test]
    fn prop_deduplicate_keeps_first_occurrences(
        elements in prop::collection::vec(0..8i32, 0..40)
    ) {
        let mut vector = RankVec::from_slice(&elements);
        let removed = vector.deduplicate();

        let mut expected = Vec::new();
        for element in &elements {
            if !expected.contains(element) {
                expected.push(*element);
            }
        }
        prop_assert_eq!(vector.as_slice(), expected.as_slice());
        prop_assert_eq!(removed, elements.len() - vector.len());
    }

    /// Uniquify Law: on sorted contents, uniquify leaves the strictly
    /// increasing sequence of distinct values.
    #[test]
    fn prop_uniquify_on_sorted_input(
        mut elements in prop::collection::vec(0..8i32, 0..40)
    ) {
        elements.sort_unstable();
        let mut vector = RankVec::from_slice(&elements);
        let removed = vector.uniquify();

        let mut expected = elements.clone();
        expected.dedup();
        prop_assert_eq!(vector.as_slice(), expected.as_slice());
        prop_assert_eq!(removed, elements.len() - expected.len());
    }

    /// Permutation Law: unsort rearranges exactly the same multiset.
    #[test]
    fn prop_unsort_permutes(
        elements in prop::collection::vec(any::<i32>(), 0..60),
        seed in any::<u64>(),
    ) {
        let mut vector = RankVec::from_slice(&elements);
        let hi = vector.len();
        let mut rng = StdRng::seed_from_u64(seed);
        vector.unsort_range_with_rng(0, hi, &mut rng);

        let mut shuffled: Vec<i32> = vector.into_iter().collect();
        shuffled.sort_unstable();
        let mut expected = elements;
        expected.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    /// Copy Law: sorting a clone never disturbs the original.
    #[test]
    fn prop_clone_isolates_the_original(
        elements in prop::collection::vec(any::<i32>(), 0..40)
    ) {
        let original = RankVec::from_slice(&elements);
        let mut copy = original.clone();
        copy.sort();
        copy.push(0);
        prop_assert_eq!(original.as_slice(), elements.as_slice());
    }
}
