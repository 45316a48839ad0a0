//! Stable sorting under an [`OrderingSpec`].
//!
//! Sorting always produces a `Vec`: set and map kinds impose their own
//! order on insertion, so "a sorted copy of the same kind" would not be
//! sorted by the requested rule.

use crate::ordering::{OrderingAdapter, OrderingSpec};
use crate::shape::Sequence;

/// Sorts `list` in place and returns it.
///
/// The sort is stable: elements the comparator reports equal keep their
/// relative order.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::sort_in_place;
/// use lambars_seq::ordering::OrderingSpec;
///
/// let mut words = vec!["bb", "a", "cc", "d"];
/// sort_in_place(&mut words, OrderingSpec::by_key(|word: &&str| word.len()));
/// assert_eq!(words, vec!["a", "d", "bb", "cc"]);
/// ```
pub fn sort_in_place<'a, 'l, T>(list: &'l mut Vec<T>, spec: OrderingSpec<'a, T>) -> &'l mut Vec<T>
where
    T: 'a,
{
    let comparator = OrderingAdapter::build(spec);
    list.sort_by(|left, right| comparator(left, right));
    log::trace!("sort_in_place: sorted {} elements", list.len());
    list
}

/// Returns the elements of `sequence` as a sorted `Vec`, leaving
/// `sequence` untouched.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::to_sorted;
/// use lambars_seq::ordering::{OrderingSpec, Value};
/// use std::cmp::Ordering;
///
/// let values = vec![Value::Double(2.5), Value::Int(1), Value::Long(2)];
/// assert_eq!(
///     to_sorted(&values, OrderingSpec::natural()),
///     vec![Value::Int(1), Value::Long(2), Value::Double(2.5)]
/// );
///
/// let descending = to_sorted(&[1, 3, 2], OrderingSpec::comparator(|left: &i32, right: &i32| right.cmp(left)));
/// assert_eq!(descending, vec![3, 2, 1]);
/// ```
pub fn to_sorted<'a, S>(sequence: &S, spec: OrderingSpec<'a, S::Item>) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: 'a,
{
    let mut sorted: Vec<S::Item> = sequence.elements().collect();
    sort_in_place(&mut sorted, spec);
    sorted
}
