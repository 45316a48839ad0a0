//! Element access, folding and extremes.

use crate::error::{SequenceError, SequenceResult};
use crate::ordering::{OrderingAdapter, OrderingSpec};
use crate::shape::Sequence;

/// Returns the first element.
///
/// # Errors
///
/// Returns an empty-structure error if `sequence` is empty.
pub fn first<S: Sequence + ?Sized>(sequence: &S) -> SequenceResult<S::Item> {
    sequence
        .elements()
        .next()
        .ok_or_else(|| SequenceError::empty("first", "List"))
}

/// Returns the first element. Same as [`first`], reported as `head`.
///
/// # Errors
///
/// Returns an empty-structure error if `sequence` is empty.
pub fn head<S: Sequence + ?Sized>(sequence: &S) -> SequenceResult<S::Item> {
    sequence
        .elements()
        .next()
        .ok_or_else(|| SequenceError::empty("head", "List"))
}

/// Returns the last element.
///
/// # Errors
///
/// Returns an empty-structure error if `sequence` is empty.
pub fn last<S: Sequence + ?Sized>(sequence: &S) -> SequenceResult<S::Item> {
    sequence
        .elements()
        .last()
        .ok_or_else(|| SequenceError::empty("last", "List"))
}

/// Removes and returns the first element of `list`.
///
/// A list used as a stack has its top at the front.
///
/// # Errors
///
/// Returns an empty-structure error if `list` is empty.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::pop;
///
/// let mut stack = vec!['a', 'b'];
/// assert_eq!(pop(&mut stack).unwrap(), 'a');
/// assert_eq!(stack, vec!['b']);
/// ```
pub fn pop<T>(list: &mut Vec<T>) -> SequenceResult<T> {
    if list.is_empty() {
        return Err(SequenceError::empty("pop", "List"));
    }
    Ok(list.remove(0))
}

/// Removes and returns the last element of `list`.
///
/// # Errors
///
/// Returns an empty-structure error if `list` is empty.
pub fn remove_last<T>(list: &mut Vec<T>) -> SequenceResult<T> {
    list.pop()
        .ok_or_else(|| SequenceError::empty("remove_last", "List"))
}

/// Folds `sequence` from the left, using the first element as the seed.
///
/// # Errors
///
/// Returns an empty-structure error if `sequence` is empty, since there is
/// no seed to return.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::inject;
///
/// assert_eq!(inject(&[1, 2, 3, 4], |sum, value| sum + value).unwrap(), 10);
/// assert!(inject(&Vec::<i32>::new(), |sum, value| sum + value).is_err());
/// ```
pub fn inject<S, F>(sequence: &S, function: F) -> SequenceResult<S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut elements = sequence.elements();
    let seed = elements
        .next()
        .ok_or_else(|| SequenceError::empty("inject", "List"))?;
    Ok(elements.fold(seed, function))
}

/// Folds `sequence` from the left, starting from `seed`.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::inject_with;
///
/// let joined = inject_with(&["a", "b"], String::from(">"), |mut text, word| {
///     text.push_str(word);
///     text
/// });
/// assert_eq!(joined, ">ab");
/// ```
pub fn inject_with<S, U, F>(sequence: &S, seed: U, function: F) -> U
where
    S: Sequence + ?Sized,
    F: FnMut(U, S::Item) -> U,
{
    sequence.elements().fold(seed, function)
}

/// Returns the greatest element, or `None` if `sequence` is empty.
///
/// When several elements are greatest, the first of them is returned.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::max;
/// use lambars_seq::ordering::OrderingSpec;
///
/// let words = ["kiwi", "plum", "fig"];
/// assert_eq!(max(&words, OrderingSpec::by_key(|word: &&str| word.len())), Some("kiwi"));
/// ```
pub fn max<'a, S>(sequence: &S, spec: OrderingSpec<'a, S::Item>) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: 'a,
{
    let comparator = OrderingAdapter::build(spec);
    sequence.elements().reduce(|answer, value| {
        if comparator(&value, &answer).is_gt() {
            value
        } else {
            answer
        }
    })
}

/// Returns the least element, or `None` if `sequence` is empty.
///
/// When several elements are least, the first of them is returned.
pub fn min<'a, S>(sequence: &S, spec: OrderingSpec<'a, S::Item>) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: 'a,
{
    let comparator = OrderingAdapter::build(spec);
    sequence.elements().reduce(|answer, value| {
        if comparator(&value, &answer).is_lt() {
            value
        } else {
            answer
        }
    })
}
