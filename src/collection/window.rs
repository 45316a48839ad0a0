//! Cutting sequences into windows and segments.

use crate::error::{SequenceError, SequenceResult};
use crate::shape::Sequence;

/// Splits `sequence` into windows of `size` elements, starting a new window
/// every `step` elements.
///
/// - `size <= 0` yields a single window holding every element (the `step`
///   is not looked at).
/// - A negative `step` yields only the first window.
/// - When `keep_remainder` is `false`, windows shorter than `size` at the
///   end are omitted.
///
/// # Errors
///
/// Returns an invalid-argument error if `size > 0` and `step == 0`.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::collate;
///
/// let values = vec![1, 2, 3, 4, 5];
/// assert_eq!(
///     collate(&values, 3, 1, false).unwrap(),
///     vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]
/// );
/// assert_eq!(
///     collate(&values, 2, 2, true).unwrap(),
///     vec![vec![1, 2], vec![3, 4], vec![5]]
/// );
/// assert!(collate(&values, 2, 0, true).is_err());
/// ```
pub fn collate<S>(
    sequence: &S,
    size: isize,
    step: isize,
    keep_remainder: bool,
) -> SequenceResult<Vec<Vec<S::Item>>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let elements: Vec<S::Item> = sequence.elements().collect();
    if size <= 0 {
        return Ok(vec![elements]);
    }
    if step == 0 {
        return Err(SequenceError::invalid("collate", "step cannot be zero"));
    }

    let size = size.unsigned_abs();
    let length = elements.len();
    let mut windows = Vec::new();
    let mut position = 0_usize;
    while position < length {
        if !keep_remainder && position + size > length {
            break;
        }
        let end = (position + size).min(length);
        windows.push(elements[position..end].to_vec());
        if step < 0 {
            break;
        }
        position += step.unsigned_abs();
    }
    Ok(windows)
}

/// [`collate`] with `step == size`, keeping the remainder.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::collate_by_size;
///
/// let values: Vec<i32> = (1..=7).collect();
/// assert_eq!(
///     collate_by_size(&values, 3),
///     vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
/// );
/// ```
pub fn collate_by_size<S>(sequence: &S, size: isize) -> Vec<Vec<S::Item>>
where
    S: Sequence + ?Sized,
{
    let elements: Vec<S::Item> = sequence.elements().collect();
    if size <= 0 {
        return vec![elements];
    }
    let mut windows = Vec::with_capacity(elements.len().div_ceil(size.unsigned_abs()));
    let mut remaining = elements.into_iter().peekable();
    while remaining.peek().is_some() {
        windows.push(remaining.by_ref().take(size.unsigned_abs()).collect());
    }
    windows
}

/// Pulls consecutive segments of the given sizes from `source`.
///
/// One segment is produced per entry of `sizes`. A negative size takes
/// everything that is left. Once the source runs dry, the remaining segments
/// are empty; elements beyond the last segment are never pulled.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::chop;
///
/// assert_eq!(chop(1..=5, &[1, -1]), vec![vec![1], vec![2, 3, 4, 5]]);
/// assert_eq!(chop(1..=3, &[2, 2, 2]), vec![vec![1, 2], vec![3], vec![]]);
/// ```
pub fn chop<I: IntoIterator>(source: I, sizes: &[isize]) -> Vec<Vec<I::Item>> {
    let mut source = source.into_iter();
    sizes
        .iter()
        .map(|&size| {
            if size < 0 {
                source.by_ref().collect()
            } else {
                source.by_ref().take(size.unsigned_abs()).collect()
            }
        })
        .collect()
}
