#![cfg(feature = "collection")]
//! Tests for `unique` and `unique_by`.

use fpkit::collection::{unique, unique_by};
use rstest::rstest;

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![1])]
#[case(vec![1, 2, 3], vec![1, 2, 3])]
#[case(vec![1, 2, 1, 3, 2, 4], vec![1, 2, 3, 4])]
#[case(vec![7, 7, 7], vec![7])]
fn unique_keeps_first_occurrences(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(unique(input), expected);
}

#[rstest]
fn unique_needs_only_partial_eq() {
    // f64 has no Eq or Hash; strict equality comparison still applies.
    assert_eq!(unique(vec![1.5, 2.5, 1.5, 3.5]), vec![1.5, 2.5, 3.5]);
}

#[rstest]
fn unique_preserves_encounter_order() {
    assert_eq!(unique(vec!["c", "a", "c", "b", "a"]), vec!["c", "a", "b"]);
}

#[rstest]
fn unique_by_deduplicates_on_the_derived_index() {
    let words = unique_by(vec!["hi", "sun", "to", "cat", "mouse"], |word| word.len());
    assert_eq!(words, vec!["hi", "sun", "mouse"]);
}

#[rstest]
fn unique_by_first_element_per_index_wins() {
    let values = unique_by(vec![10, 20, 11, 21, 32], |value| value % 10);
    assert_eq!(values, vec![10, 11, 32]);
}

#[rstest]
fn unique_by_with_constant_index_keeps_one_element() {
    let values = unique_by(vec![1, 2, 3], |_| ());
    assert_eq!(values, vec![1]);
}

#[rstest]
fn unique_by_handles_large_index_sets() {
    // Exceeds the inline seen-buffer so the spill path is exercised.
    let values: Vec<u32> = (0..64).chain(0..64).collect();
    let expected: Vec<u32> = (0..64).collect();
    assert_eq!(unique_by(values, |value| *value), expected);
}
