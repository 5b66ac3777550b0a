#![cfg(feature = "compose")]
//! Tests for the panic-to-result callable adapter.

use fpkit::compose::panics_to_result;
use rstest::rstest;

#[rstest]
fn successful_results_pass_through_unchanged() {
    let safe_parse = panics_to_result(|text: &str| text.parse::<i32>().unwrap_or(0));
    assert_eq!(safe_parse("42"), Ok(42));
    assert_eq!(safe_parse("nope"), Ok(0));
}

#[rstest]
fn panics_become_errors_with_the_payload_message() {
    let failing = panics_to_result(|_: ()| -> u8 { panic!("intentional failure") });
    let error = failing(()).unwrap_err();
    assert_eq!(error.message, "intentional failure");
    assert_eq!(
        error.to_string(),
        "wrapped callable panicked: intentional failure"
    );
}

#[rstest]
fn formatted_panic_messages_are_captured() {
    let failing = panics_to_result(|value: i32| -> i32 { panic!("rejected value {value}") });
    let error = failing(7).unwrap_err();
    assert_eq!(error.message, "rejected value 7");
}

#[rstest]
fn the_adapter_is_reusable_after_a_panic() {
    let divide = panics_to_result(|(numerator, denominator): (i32, i32)| numerator / denominator);

    assert!(divide((1, 0)).is_err());
    assert_eq!(divide((9, 3)), Ok(3));
    assert_eq!(divide((10, 2)), Ok(5));
}

#[rstest]
fn tuple_arguments_adapt_multi_argument_callables() {
    let area = panics_to_result(|(width, height): (u32, u32)| width * height);
    assert_eq!(area((6, 7)), Ok(42));
}
