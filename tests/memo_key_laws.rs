#![cfg(feature = "memo")]
//! Property-based tests for key derivation and memoization.
//!
//! Scalar encodings are injective over the integer domain used here, so
//! distinct argument lists must always derive distinct keys.

use fpkit::memo::{IdentityRegistry, MemoCache, MemoKey};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating argument lists
// =============================================================================

fn arbitrary_arguments() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..8)
}

// =============================================================================
// Key derivation laws
// =============================================================================

proptest! {
    #[test]
    fn prop_equal_arguments_derive_equal_keys(arguments in arbitrary_arguments()) {
        let mut registry = IdentityRegistry::new();

        let first = arguments.key_input().encode(&mut registry);
        let second = arguments.key_input().encode(&mut registry);

        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_distinct_arguments_derive_distinct_keys(
        first in arbitrary_arguments(),
        second in arbitrary_arguments()
    ) {
        prop_assume!(first != second);

        let mut registry = IdentityRegistry::new();
        let first_key = first.key_input().encode(&mut registry);
        let second_key = second.key_input().encode(&mut registry);

        prop_assert_ne!(first_key, second_key);
    }
}

// =============================================================================
// Memoization laws
// =============================================================================

proptest! {
    #[test]
    fn prop_memoized_result_is_stable_across_calls(arguments in arbitrary_arguments()) {
        let mut cache = MemoCache::new();
        let expected: i64 = arguments.iter().map(|value| value.wrapping_rem(1000)).sum();

        for _ in 0..3 {
            let value = cache.get_or_compute_with_args(
                |values: Vec<i64>| values.iter().map(|value| value.wrapping_rem(1000)).sum::<i64>(),
                arguments.clone(),
            );
            prop_assert_eq!(value, expected);
        }

        prop_assert_eq!(cache.len(), 1);
    }
}

proptest! {
    #[test]
    fn prop_reset_always_restores_the_empty_cache(arguments in arbitrary_arguments()) {
        let mut cache = MemoCache::new();
        cache.get_or_compute_with_args(|values: Vec<i64>| values.len(), arguments);

        cache.reset();

        prop_assert!(cache.is_empty());
    }
}
