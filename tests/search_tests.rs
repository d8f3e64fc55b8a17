//! Unit tests for unordered find, predecessor search, and disordered.

use rankvec::RankVec;
use rstest::rstest;

// =============================================================================
// Unordered find
// =============================================================================

#[rstest]
fn find_returns_the_highest_ranked_match() {
    let vector = RankVec::from_slice(&[4, 7, 4, 9, 4]);
    assert_eq!(vector.find(&4), Some(4));
}

#[rstest]
fn find_misses_report_none() {
    let vector = RankVec::from_slice(&[1, 2, 3]);
    assert_eq!(vector.find(&5), None);
}

#[rstest]
fn find_on_empty_is_none() {
    let vector: RankVec<i32> = RankVec::new();
    assert_eq!(vector.find(&1), None);
}

#[rstest]
fn find_in_respects_the_range() {
    let vector = RankVec::from_slice(&[4, 7, 4, 9, 4]);
    assert_eq!(vector.find_in(&4, 0, 4), Some(2));
    assert_eq!(vector.find_in(&4, 1, 2), None);
    assert_eq!(vector.find_in(&4, 3, 3), None);
}

#[rstest]
#[should_panic]
fn find_in_past_the_end_panics() {
    let vector = RankVec::from_slice(&[1, 2]);
    vector.find_in(&1, 0, 3);
}

// =============================================================================
// Predecessor search
// =============================================================================

#[rstest]
#[case(4, Some(1))] // between 3 and 5: rank of 3
#[case(0, None)] // below everything: the before-start sentinel
#[case(7, Some(3))] // exact match on the last element
#[case(1, Some(0))] // exact match on the first element
#[case(8, Some(3))] // above everything
fn search_returns_the_rightmost_element_at_most_the_query(
    #[case] query: i32,
    #[case] expected: Option<usize>,
) {
    let vector = RankVec::from_slice(&[1, 3, 5, 7]);
    assert_eq!(vector.search(&query), expected);
}

#[rstest]
fn search_with_duplicates_returns_the_rightmost() {
    let vector = RankVec::from_slice(&[1, 2, 2, 2, 3]);
    assert_eq!(vector.search(&2), Some(3));
}

#[rstest]
fn search_on_empty_is_none() {
    let vector: RankVec<i32> = RankVec::new();
    assert_eq!(vector.search(&1), None);
}

#[rstest]
fn search_in_misses_below_the_range_floor() {
    let vector = RankVec::from_slice(&[0, 1, 3, 5, 7]);
    // 0 at rank 0 is outside [1, 5), so the query 0 has no predecessor there
    assert_eq!(vector.search_in(&0, 1, 5), None);
    assert_eq!(vector.search_in(&1, 1, 5), Some(1));
}

#[rstest]
fn search_gives_the_sorted_insertion_point() {
    let vector = RankVec::from_slice(&[1, 3, 5, 7]);
    for query in 0..9 {
        let insert_at = vector.search(&query).map_or(0, |rank| rank + 1);
        let mut copy = vector.clone();
        copy.insert(insert_at, query);
        assert_eq!(copy.disordered(), 0, "inserting {query} at {insert_at}");
    }
}

// =============================================================================
// Disordered
// =============================================================================

#[rstest]
#[case(&[], 0)]
#[case(&[1], 0)]
#[case(&[1, 2, 3], 0)]
#[case(&[3, 1, 2], 1)]
#[case(&[3, 2, 1], 2)]
#[case(&[2, 2, 2], 0)]
fn disordered_counts_adjacent_inversions(#[case] elements: &[i32], #[case] expected: usize) {
    let vector = RankVec::from_slice(elements);
    assert_eq!(vector.disordered(), expected);
}
