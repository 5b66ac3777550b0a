#![cfg(feature = "option")]
//! Tests for the Option algebra: Semigroup, Monoid, and callback combining.

use fpkit::option::{Monoid, OptionExt, Semigroup};
use rstest::rstest;

// =============================================================================
// Semigroup
// =============================================================================

#[rstest]
#[case("", "", "")]
#[case("ab", "", "ab")]
#[case("", "cd", "cd")]
#[case("ab", "cd", "abcd")]
fn string_combine_concatenates(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
    let combined = String::from(left).combine(String::from(right));
    assert_eq!(combined, expected);
}

#[rstest]
fn vec_combine_concatenates() {
    assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
}

#[rstest]
fn string_combine_is_associative() {
    let build = |text: &str| String::from(text);

    let left = build("a").combine(build("b")).combine(build("c"));
    let right = build("a").combine(build("b").combine(build("c")));
    assert_eq!(left, right);
}

// =============================================================================
// Option as a monoid
// =============================================================================

#[rstest]
fn some_values_combine_through_the_element_semigroup() {
    let combined = Some(String::from("foo")).combine(Some(String::from("bar")));
    assert_eq!(combined, Some(String::from("foobar")));
}

#[rstest]
fn none_is_absorbed_on_either_side() {
    assert_eq!(None.combine(Some(vec![1])), Some(vec![1]));
    assert_eq!(Some(vec![1]).combine(None), Some(vec![1]));
    assert_eq!(Option::<Vec<i32>>::None.combine(None), None);
}

#[rstest]
fn empty_is_none() {
    assert_eq!(Option::<String>::empty(), None);
}

#[rstest]
fn option_identity_laws_hold() {
    let value = || Some(String::from("x"));

    assert_eq!(Option::empty().combine(value()), value());
    assert_eq!(value().combine(Option::empty()), value());
}

#[rstest]
fn option_combine_is_associative() {
    let a = || Some(vec![1]);
    let b = || Some(vec![2]);
    let c = || Some(vec![3]);

    let left = a().combine(b()).combine(c());
    let right = a().combine(b().combine(c()));
    assert_eq!(left, right);
}

// =============================================================================
// Callback-directed combining
// =============================================================================

#[rstest]
fn combine_with_runs_the_callback_for_two_values() {
    assert_eq!(Some(2).combine_with(Some(3), |a, b| a * b), Some(6));
}

#[rstest]
fn combine_with_returns_the_present_side() {
    assert_eq!(Some(2).combine_with(None, |a, b| a * b), Some(2));
    assert_eq!(None.combine_with(Some(3), |a: i32, b| a * b), Some(3));
}

#[rstest]
fn combine_with_of_two_nones_is_none() {
    let none: Option<i32> = None;
    assert_eq!(none.combine_with(None, |a, b| a + b), None);
}

#[rstest]
fn combine_with_works_for_elements_without_a_semigroup() {
    // i32 has no Semigroup instance here; the callback supplies the
    // combining operation.
    let larger = Some(10).combine_with(Some(4), i32::max);
    assert_eq!(larger, Some(10));
}
