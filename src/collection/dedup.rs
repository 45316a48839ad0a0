//! Removing duplicates while keeping the first occurrence of each element.
//!
//! Two strategies are offered and they intentionally differ in cost:
//!
//! | Function            | Result              | Lookup per element |
//! |---------------------|---------------------|--------------------|
//! | [`unique`]          | same container kind | O(k) linear scan   |
//! | [`unique_in_place`] | the same `Vec`      | O(k) linear scan   |
//! | [`to_unique`]       | same container kind | O(log k) sorted    |
//!
//! where `k` is the number of distinct elements accepted so far. The linear
//! scan only needs the comparator to answer "equal or not"; the sorted
//! lookup needs it to be a consistent total order.

use crate::iter;
use crate::ordering::{Comparator, OrderingAdapter, OrderingSpec};
use crate::shape::Shaped;

/// Returns a container of the same kind holding the first occurrence of
/// each distinct element, in source order.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::unique;
/// use lambars_seq::ordering::OrderingSpec;
///
/// assert_eq!(unique(&vec![1, 3, 3, 2, 1], OrderingSpec::natural()), vec![1, 3, 2]);
///
/// let words = ["apple", "Avocado", "banana"];
/// let by_initial = unique(&words, OrderingSpec::by_key(|word: &&str| word[..1].to_lowercase()));
/// assert_eq!(by_initial, vec!["apple", "banana"]);
/// ```
pub fn unique<'a, S>(sequence: &S, spec: OrderingSpec<'a, S::Item>) -> S::Similar
where
    S: Shaped + ?Sized,
    S::Item: 'a,
{
    let comparator = OrderingAdapter::build(spec);
    sequence.collect_similar(unique_elements(sequence.elements(), &comparator))
}

/// Removes later duplicates from `list` and returns the same list.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::unique_in_place;
/// use lambars_seq::ordering::OrderingSpec;
///
/// let mut list = vec![2, 2, 1, 2];
/// unique_in_place(&mut list, OrderingSpec::natural()).push(9);
/// assert_eq!(list, vec![2, 1, 9]);
/// ```
pub fn unique_in_place<'a, 'l, T>(
    list: &'l mut Vec<T>,
    spec: OrderingSpec<'a, T>,
) -> &'l mut Vec<T>
where
    T: 'a,
{
    let comparator = OrderingAdapter::build(spec);
    let original_length = list.len();
    let kept = unique_elements(std::mem::take(list), &comparator);
    log::trace!(
        "unique_in_place: kept={} removed={}",
        kept.len(),
        original_length - kept.len()
    );
    *list = kept;
    list
}

/// Like [`unique`], but tracks seen elements in a sorted buffer.
///
/// The result is the same as [`unique`] whenever the comparator is a total
/// order. Elements are cloned into the seen buffer.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::to_unique;
/// use lambars_seq::ordering::OrderingSpec;
/// use std::collections::VecDeque;
///
/// let deque: VecDeque<i32> = VecDeque::from(vec![5, 1, 5, 2]);
/// let distinct = to_unique(&deque, OrderingSpec::natural());
/// assert_eq!(distinct, VecDeque::from(vec![5, 1, 2]));
/// ```
pub fn to_unique<'a, S>(sequence: &S, spec: OrderingSpec<'a, S::Item>) -> S::Similar
where
    S: Shaped + ?Sized,
    S::Item: Clone + 'a,
{
    sequence.collect_similar(iter::to_unique(sequence.elements(), spec))
}

fn unique_elements<T, I>(elements: I, comparator: &Comparator<'_, T>) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut accepted: Vec<T> = Vec::new();
    for element in elements {
        if !accepted
            .iter()
            .any(|existing| comparator(&element, existing).is_eq())
        {
            accepted.push(element);
        }
    }
    accepted
}
