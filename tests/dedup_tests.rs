//! Integration tests for deduplication.
//!
//! Covers the copy, in-place and lazy forms across container kinds and
//! ordering rules.

use lambars_seq::collection::{to_unique, unique, unique_in_place};
use lambars_seq::iter::{self, Cursor};
use lambars_seq::ordering::{Callback, OrderingSpec, Value};
use rstest::rstest;
use rust_decimal_macros::dec;
use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};

// =============================================================================
// unique
// =============================================================================

#[rstest]
fn test_unique_keeps_first_occurrences_in_order() {
    assert_eq!(unique(&vec![1, 3, 3, 2, 1], OrderingSpec::natural()), vec![1, 3, 2]);
}

#[rstest]
fn test_unique_of_empty_is_empty() {
    let empty: Vec<String> = Vec::new();
    assert!(unique(&empty, OrderingSpec::natural()).is_empty());
}

#[rstest]
fn test_unique_on_a_slice_returns_a_vec() {
    let slice: &[char] = &['a', 'b', 'a'];
    let result: Vec<char> = unique(slice, OrderingSpec::natural());
    assert_eq!(result, vec!['a', 'b']);
}

#[rstest]
fn test_unique_on_a_deque_returns_a_deque() {
    let deque = VecDeque::from(vec![2, 2, 3]);
    let result: VecDeque<i32> = unique(&deque, OrderingSpec::natural());
    assert_eq!(result, VecDeque::from(vec![2, 3]));
}

#[rstest]
fn test_unique_on_map_entries_by_value() {
    let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2), ("c", 1)].into_iter().collect();
    let result = unique(&map, OrderingSpec::by_key(|entry: &(&str, i32)| entry.1));
    assert_eq!(
        result.into_iter().collect::<Vec<_>>(),
        vec![("a", 1), ("b", 2)]
    );
}

#[rstest]
fn test_unique_treats_numeric_representations_as_one() {
    let values = vec![
        Value::Int(1),
        Value::Long(1),
        Value::Double(1.0),
        Value::Decimal(dec!(1.00)),
        Value::Int(2),
    ];
    let result = unique(&values, OrderingSpec::natural());
    assert!(matches!(result.as_slice(), [Value::Int(1), Value::Int(2)]));
}

#[rstest]
fn test_unique_with_comparator() {
    let spec = OrderingSpec::comparator(|left: &i32, right: &i32| (left / 10).cmp(&(right / 10)));
    assert_eq!(unique(&vec![11, 15, 23, 19, 27], spec), vec![11, 23]);
}

#[rstest]
#[case(1)]
#[case(0)]
fn test_unique_with_a_non_binary_callback_uses_it_as_a_key(#[case] arity: usize) {
    let callback = Callback::from_arity(arity, |arguments: &[&&str]| Value::from(arguments[0].len()));
    let result = unique(&vec!["one", "two", "three", "four"], callback.into());
    assert_eq!(result, vec!["one", "three", "four"]);
}

#[rstest]
fn test_unique_with_a_binary_callback_uses_it_as_a_comparator() {
    let callback = Callback::from_arity(2, |arguments: &[&i32]| {
        Value::from((arguments[0] % 3) - (arguments[1] % 3))
    });
    assert_eq!(unique(&vec![1, 4, 2, 5, 3], callback.into()), vec![1, 2, 3]);
}

// =============================================================================
// unique_in_place
// =============================================================================

#[rstest]
fn test_unique_in_place_mutates_and_returns_the_list() {
    let mut list = vec!["x", "y", "x"];
    let returned = unique_in_place(&mut list, OrderingSpec::natural());
    returned.push("z");
    assert_eq!(list, vec!["x", "y", "z"]);
}

#[rstest]
fn test_unique_in_place_on_empty() {
    let mut list: Vec<i32> = Vec::new();
    assert!(unique_in_place(&mut list, OrderingSpec::natural()).is_empty());
}

// =============================================================================
// to_unique
// =============================================================================

#[rstest]
fn test_to_unique_collection_matches_unique() {
    let values = vec![5, 3, 5, 1, 3, 8];
    assert_eq!(
        to_unique(&values, OrderingSpec::natural()),
        unique(&values, OrderingSpec::natural())
    );
}

#[rstest]
fn test_iterator_to_unique_is_lazy() {
    let mut cursor = iter::to_unique(1.., OrderingSpec::comparator(|left: &u64, right: &u64| {
        (left % 4).cmp(&(right % 4))
    }));
    let first_four: Vec<u64> = cursor.by_ref().take(4).collect();
    assert_eq!(first_four, vec![1, 2, 3, 4]);
}

#[rstest]
fn test_iterator_to_unique_has_next_is_idempotent() {
    let mut cursor = iter::to_unique(vec![1, 1, 2], OrderingSpec::natural());
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(2));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
}

#[rstest]
fn test_reverse_comparator_does_not_change_which_are_duplicates() {
    let spec = OrderingSpec::comparator(|left: &i32, right: &i32| match left.cmp(right) {
        Ordering::Less => Ordering::Greater,
        Ordering::Greater => Ordering::Less,
        Ordering::Equal => Ordering::Equal,
    });
    let result: Vec<i32> = iter::to_unique(vec![3, 1, 3, 2, 1], spec).collect();
    assert_eq!(result, vec![3, 1, 2]);
}
