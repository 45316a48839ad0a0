//! Assigning values to several list positions at once.

use crate::error::{SequenceError, SequenceResult};
use crate::ordering::Value;

/// Assigns `values[i]` to position `indices[i]` of `list`, in order.
///
/// Indices are given as [`Value`]s and must be `Int` or `Long`; a negative
/// index counts from the end. When an index repeats, the later value wins.
/// Every index is checked before `list` is touched, so a failed call leaves
/// `list` unchanged.
///
/// # Errors
///
/// - invalid argument if `indices` and `values` differ in length
/// - invalid argument if an index is not an integer
/// - index out of bounds if an index does not name an existing position
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::put_at;
/// use lambars_seq::ordering::Value;
///
/// let mut list = vec!['a', 'b', 'c', 'd'];
/// put_at(&mut list, &[Value::Int(0), Value::Long(-1)], vec!['x', 'y']).unwrap();
/// assert_eq!(list, vec!['x', 'b', 'c', 'y']);
///
/// let error = put_at(&mut list, &[Value::from("0")], vec!['z']).unwrap_err();
/// assert!(error.is_invalid_argument());
/// ```
pub fn put_at<T>(list: &mut Vec<T>, indices: &[Value], values: Vec<T>) -> SequenceResult<()> {
    if indices.len() != values.len() {
        return Err(SequenceError::invalid(
            "put_at",
            format!(
                "Trying to replace {} elements with {} elements",
                indices.len(),
                values.len()
            ),
        ));
    }

    let positions = indices
        .iter()
        .map(|index| resolve(index, list.len()))
        .collect::<SequenceResult<Vec<usize>>>()?;

    for (position, value) in positions.into_iter().zip(values) {
        list[position] = value;
    }
    log::trace!("put_at: assigned {} positions", indices.len());
    Ok(())
}

fn resolve(index: &Value, length: usize) -> SequenceResult<usize> {
    let Some(requested) = index.as_integer() else {
        return Err(SequenceError::invalid(
            "put_at",
            format!(
                "Can only index a List with another List of Integers, not a List of {}",
                index.type_name()
            ),
        ));
    };
    let out_of_bounds = || SequenceError::IndexOutOfBounds {
        operation: "put_at",
        index: requested,
        length,
    };
    let length_signed = i64::try_from(length).map_err(|_| out_of_bounds())?;
    let normalized = if requested < 0 {
        requested + length_signed
    } else {
        requested
    };
    usize::try_from(normalized)
        .ok()
        .filter(|position| *position < length)
        .ok_or_else(out_of_bounds)
}
