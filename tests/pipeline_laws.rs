//! Property-based tests for the bounded prefix and suffix operations.

use lambars_seq::collection;
use lambars_seq::iter::SequencePipeline;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..32)
}

fn count() -> impl Strategy<Value = isize> {
    -4..40_isize
}

proptest! {
    // =========================================================================
    // Complements
    // =========================================================================

    #[test]
    fn prop_take_then_drop_rebuilds_the_source(values in small_vec(), count in count()) {
        let mut rebuilt = collection::take(&values, count);
        rebuilt.extend(collection::drop(&values, count));
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn prop_drop_right_then_take_right_rebuilds_the_source(values in small_vec(), count in count()) {
        let mut rebuilt = collection::drop_right(&values, count);
        rebuilt.extend(collection::take_right(&values, count));
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn prop_take_while_then_drop_while_rebuilds_the_source(values in small_vec(), bound: i32) {
        let mut rebuilt = collection::take_while(&values, |value| *value < bound);
        rebuilt.extend(collection::drop_while(&values, |value| *value < bound));
        prop_assert_eq!(rebuilt, values);
    }

    // =========================================================================
    // Lazy and eager agree
    // =========================================================================

    #[test]
    fn prop_lazy_take_matches_eager(values in small_vec(), count in count()) {
        let lazy: Vec<i32> = values.iter().copied().take_n(count).collect();
        prop_assert_eq!(lazy, collection::take(&values, count));
    }

    #[test]
    fn prop_lazy_drop_right_matches_eager(values in small_vec(), count in count()) {
        let lazy: Vec<i32> = values.iter().copied().drop_right(count).collect();
        prop_assert_eq!(lazy, collection::drop_right(&values, count));
    }

    // =========================================================================
    // init and tail
    // =========================================================================

    #[test]
    fn prop_init_and_tail_drop_one(values in prop::collection::vec(any::<i32>(), 1..32)) {
        let init = collection::init(&values).unwrap();
        let tail = collection::tail(&values).unwrap();
        prop_assert_eq!(init.len(), values.len() - 1);
        prop_assert_eq!(tail.len(), values.len() - 1);
        prop_assert_eq!(&init[..], &values[..values.len() - 1]);
        prop_assert_eq!(&tail[..], &values[1..]);
    }
}
