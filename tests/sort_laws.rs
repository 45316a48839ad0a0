//! Property-based tests for sorting.

use lambars_seq::collection::{sort_in_place, to_sorted};
use lambars_seq::ordering::OrderingSpec;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50_i32, 0..64)
}

/// Pairs of (key, position) so stability can be observed.
fn tagged(values: &[i32]) -> Vec<(i32, usize)> {
    values.iter().copied().zip(0..).collect()
}

proptest! {
    #[test]
    fn prop_natural_sort_matches_std(values in small_vec()) {
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(to_sorted(&values, OrderingSpec::natural()), expected);
    }

    #[test]
    fn prop_sort_in_place_agrees_with_to_sorted(values in small_vec()) {
        let expected = to_sorted(&values, OrderingSpec::natural());
        let mut list = values;
        sort_in_place(&mut list, OrderingSpec::natural());
        prop_assert_eq!(list, expected);
    }

    #[test]
    fn prop_sort_by_key_is_stable(values in small_vec()) {
        let sorted = to_sorted(&tagged(&values), OrderingSpec::by_key(|pair: &(i32, usize)| pair.0 / 10));
        for window in sorted.windows(2) {
            let (left, right) = (window[0], window[1]);
            prop_assert!(left.0 / 10 <= right.0 / 10);
            if left.0 / 10 == right.0 / 10 {
                prop_assert!(left.1 < right.1);
            }
        }
    }

    #[test]
    fn prop_sort_is_a_permutation(values in small_vec()) {
        let mut sorted = to_sorted(&values, OrderingSpec::by_key(|value: &i32| -value));
        sorted.sort_unstable();
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }
}
