#![cfg(feature = "collection")]
//! Tests for `group`.

use fpkit::collection::group;
use rstest::rstest;

#[rstest]
fn group_partitions_by_the_derived_key() {
    let grouped = group(vec!["value1", "value2", "value3", "value4"], |value| {
        value.ends_with(|last: char| last.to_digit(10).is_some_and(|digit| digit % 2 == 0))
    });

    assert_eq!(grouped[&true], vec!["value2", "value4"]);
    assert_eq!(grouped[&false], vec!["value1", "value3"]);
}

#[rstest]
fn group_preserves_order_within_each_group() {
    let grouped = group(0..10, |value| value % 3);

    assert_eq!(grouped[&0], vec![0, 3, 6, 9]);
    assert_eq!(grouped[&1], vec![1, 4, 7]);
    assert_eq!(grouped[&2], vec![2, 5, 8]);
}

#[rstest]
fn group_of_empty_input_has_no_groups() {
    let grouped = group(Vec::<i32>::new(), |value| *value);
    assert!(grouped.is_empty());
}

#[rstest]
fn group_with_string_keys() {
    let grouped = group(vec!["apple", "banana", "avocado"], |word| {
        word.chars().next().unwrap_or_default().to_string()
    });

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["a"], vec!["apple", "avocado"]);
    assert_eq!(grouped["b"], vec!["banana"]);
}

#[rstest]
fn every_element_lands_in_exactly_one_group() {
    let values: Vec<i32> = (0..100).collect();
    let grouped = group(values.clone(), |value| value % 7);

    let total: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(total, values.len());
}
