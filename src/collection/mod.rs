//! Algorithms over whole collections.
//!
//! Every function here reads its input through [`Sequence`] and, when it
//! builds a new collection, writes it through [`Shaped`], so the result has
//! the same kind as the input: a `Vec` gives a `Vec`, a `BTreeSet` gives a
//! `BTreeSet`, a slice or array gives a `Vec`. Inputs are never modified
//! except by the functions whose names say so (`*_in_place`, `pop`,
//! `remove_last`, `put_at`, `shuffle`).
//!
//! # Overview
//!
//! | Area        | Functions                                                         |
//! |-------------|-------------------------------------------------------------------|
//! | dedup       | [`unique`], [`unique_in_place`], [`to_unique`]                    |
//! | sorting     | [`sort_in_place`], [`to_sorted`]                                  |
//! | windows     | [`collate`], [`collate_by_size`], [`chop`]                        |
//! | grouping    | [`group_by`], [`group_by_all`], [`group_by_identity`], [`count_by`], [`collect_entries`] |
//! | set algebra | [`intersect`], [`minus`], [`disjoint`], [`plus`]                  |
//! | bounds      | [`take`], [`drop`], [`take_while`], [`drop_while`], [`init`], [`tail`], [`drop_right`], [`take_right`] |
//! | access      | [`first`], [`head`], [`last`], [`pop`], [`remove_last`], [`inject`], [`inject_with`], [`max`], [`min`] |
//! | assignment  | [`put_at`]                                                        |
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::collection::{drop_right, unique};
//! use lambars_seq::ordering::OrderingSpec;
//! use std::collections::BTreeSet;
//!
//! let list = vec![1, 3, 3, 2, 1];
//! assert_eq!(unique(&list, OrderingSpec::natural()), vec![1, 3, 2]);
//!
//! let set: BTreeSet<i32> = (1..=5).collect();
//! let trimmed: BTreeSet<i32> = drop_right(&set, 2);
//! assert_eq!(trimmed.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

mod access;
mod dedup;
mod grouping;
mod set_algebra;
#[cfg(feature = "shuffle")]
mod shuffle;
mod sort;
mod splice;
mod window;

pub use access::{first, head, inject, inject_with, last, max, min, pop, remove_last};
pub use dedup::{to_unique, unique, unique_in_place};
pub use grouping::{
    GroupHasher, GroupKey, GroupMap, Grouping, collect_entries, count_by, group_by, group_by_all,
    group_by_identity,
};
pub use set_algebra::{disjoint, intersect, minus, plus};
#[cfg(feature = "shuffle")]
pub use shuffle::{shuffle, shuffle_default, shuffled, shuffled_default};
pub use sort::{sort_in_place, to_sorted};
pub use splice::put_at;
pub use window::{chop, collate, collate_by_size};

use crate::error::{SequenceError, SequenceResult};
use crate::iter;
use crate::shape::Shaped;

// =============================================================================
// Bounds
// =============================================================================

/// Returns the first `count` elements. A `count` of zero or less gives an
/// empty collection.
pub fn take<S: Shaped + ?Sized>(sequence: &S, count: isize) -> S::Similar {
    sequence.collect_similar(iter::take(sequence.elements(), count))
}

/// Returns everything after the first `count` elements.
pub fn drop<S: Shaped + ?Sized>(sequence: &S, count: isize) -> S::Similar {
    sequence.collect_similar(iter::drop(sequence.elements(), count))
}

/// Returns the longest prefix whose elements satisfy `predicate`.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::{drop_while, take_while};
///
/// let values = [1, 3, 2];
/// assert_eq!(take_while(&values, |value| *value < 3), vec![1]);
/// assert_eq!(drop_while(&values, |value| *value < 3), vec![3, 2]);
/// ```
pub fn take_while<S, P>(sequence: &S, predicate: P) -> S::Similar
where
    S: Shaped + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    sequence.collect_similar(iter::take_while(sequence.elements(), predicate))
}

/// Returns everything from the first element that fails `predicate` on.
pub fn drop_while<S, P>(sequence: &S, predicate: P) -> S::Similar
where
    S: Shaped + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    sequence.collect_similar(iter::drop_while(sequence.elements(), predicate))
}

/// Returns every element except the last.
///
/// # Errors
///
/// Returns an empty-structure error if `sequence` is empty.
pub fn init<S: Shaped + ?Sized>(sequence: &S) -> SequenceResult<S::Similar> {
    if sequence.is_empty() {
        return Err(SequenceError::empty("init", "List"));
    }
    Ok(sequence.collect_similar(iter::drop_right(sequence.elements(), 1)))
}

/// Returns every element except the first.
///
/// # Errors
///
/// Returns an empty-structure error if `sequence` is empty.
pub fn tail<S: Shaped + ?Sized>(sequence: &S) -> SequenceResult<S::Similar> {
    if sequence.is_empty() {
        return Err(SequenceError::empty("tail", "List"));
    }
    Ok(sequence.collect_similar(iter::drop(sequence.elements(), 1)))
}

/// Returns every element except the last `count`.
pub fn drop_right<S: Shaped + ?Sized>(sequence: &S, count: isize) -> S::Similar {
    let keep = sequence
        .length()
        .saturating_sub(count.max(0).unsigned_abs());
    sequence.collect_similar(sequence.elements().take(keep))
}

/// Returns the last `count` elements, in order.
pub fn take_right<S: Shaped + ?Sized>(sequence: &S, count: isize) -> S::Similar {
    let skip = sequence
        .length()
        .saturating_sub(count.max(0).unsigned_abs());
    sequence.collect_similar(sequence.elements().skip(skip))
}
