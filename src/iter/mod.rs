//! Bounded, single-pass iterator wrappers.
//!
//! Each wrapper owns its source and keeps at most a small, fixed buffer.
//! They all share the same one-slot state machine ([`Lookahead`]) so that
//! [`Cursor::has_next`] can be asked any number of times without consuming
//! anything: the slot is filled on the first question and handed out by the
//! next call to `next()`.
//!
//! | Function       | Buffer         | Work done at construction             |
//! |----------------|----------------|---------------------------------------|
//! | [`take`]       | 1              | none                                  |
//! | [`drop`]       | 1              | discards `n` elements                 |
//! | [`take_while`] | 1              | tests the first element               |
//! | [`drop_while`] | 1              | discards the passing prefix           |
//! | [`init`]       | 2              | pulls two elements                    |
//! | [`tail`]       | 1              | discards one element                  |
//! | [`drop_right`] | `n + 1`        | fills the window                      |
//! | [`take_right`] | `n`            | consumes the whole source             |
//! | [`indexed`]    | 1              | none                                  |
//! | [`to_unique`]  | seen elements  | finds the first element               |
//!
//! The same operations are available as methods through
//! [`SequencePipeline`], which is implemented for every iterator.
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::iter::{Cursor, SequencePipeline};
//!
//! let mut cursor = (1..=10).drop_n(2).take_n(3);
//! assert!(cursor.has_next());
//! assert_eq!(cursor.collect::<Vec<_>>(), vec![3, 4, 5]);
//!
//! let middle: Vec<i32> = vec![1, 2, 3, 4].into_iter().tail().unwrap().init().unwrap().collect();
//! assert_eq!(middle, vec![2, 3]);
//! ```

mod bounded;
mod drop_right;
mod drop_while;
mod indexed;
mod init;
mod lookahead;
mod take_while;
mod to_unique;

pub use bounded::{PassThrough, Take, drop, tail, take};
pub use drop_right::{DropRight, drop_right, take_right};
pub use drop_while::drop_while;
pub use indexed::{Indexed, WithIndex, indexed, indexed_map, with_index};
pub use init::{Init, init};
pub use lookahead::Lookahead;
pub use take_while::{TakeWhile, take_while};
pub use to_unique::{ToUnique, to_unique};

use crate::error::SequenceResult;
use crate::ordering::OrderingSpec;

/// An iterator that can report whether another element is available
/// without yielding it.
pub trait Cursor: Iterator {
    /// Returns `true` if the next call to `next()` will yield an element.
    ///
    /// Repeated calls without an intervening `next()` pull nothing further
    /// from the source.
    fn has_next(&mut self) -> bool;
}

/// Method-style access to the bounded wrappers.
///
/// Method names avoid the ones already taken by [`Iterator`]: the
/// buffering `take_while` is [`take_while_buffered`](Self::take_while_buffered)
/// and so on.
pub trait SequencePipeline: Iterator + Sized {
    /// See [`take`].
    fn take_n(self, count: isize) -> Take<Self> {
        take(self, count)
    }

    /// See [`drop`].
    fn drop_n(self, count: isize) -> PassThrough<Self> {
        drop(self, count)
    }

    /// See [`take_while`].
    fn take_while_buffered<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        take_while(self, predicate)
    }

    /// See [`drop_while`].
    fn drop_while_buffered<P>(self, predicate: P) -> PassThrough<Self>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        drop_while(self, predicate)
    }

    /// See [`init`].
    ///
    /// # Errors
    ///
    /// Returns an empty-structure error if the iterator yields nothing.
    fn init(self) -> SequenceResult<Init<Self>> {
        init(self)
    }

    /// See [`tail`].
    ///
    /// # Errors
    ///
    /// Returns an empty-structure error if the iterator yields nothing.
    fn tail(self) -> SequenceResult<PassThrough<Self>> {
        tail(self)
    }

    /// See [`drop_right`].
    fn drop_right(self, count: isize) -> DropRight<Self> {
        drop_right(self, count)
    }

    /// See [`take_right`].
    fn take_right(self, count: isize) -> std::collections::vec_deque::IntoIter<Self::Item> {
        take_right(self, count)
    }

    /// See [`indexed`].
    fn indexed(self, offset: isize) -> Indexed<Self> {
        indexed(self, offset)
    }

    /// See [`with_index`].
    fn with_index(self, offset: isize) -> WithIndex<Self> {
        with_index(self, offset)
    }

    /// See [`to_unique`].
    fn to_unique<'a>(self, spec: OrderingSpec<'a, Self::Item>) -> ToUnique<'a, Self>
    where
        Self::Item: Clone + 'a,
    {
        to_unique(self, spec)
    }

    /// See [`chop`](crate::collection::chop).
    fn chop(self, sizes: &[isize]) -> Vec<Vec<Self::Item>> {
        crate::collection::chop(self, sizes)
    }
}

impl<I: Iterator> SequencePipeline for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_methods_compose() {
        let collected: Vec<(isize, i32)> = (1..=8)
            .drop_while_buffered(|value| *value < 3)
            .drop_right(2)
            .indexed(1)
            .collect();
        assert_eq!(collected, vec![(1, 3), (2, 4), (3, 5), (4, 6)]);
    }

    #[rstest]
    fn test_take_right_method() {
        assert_eq!((1..=5).take_right(2).collect::<Vec<_>>(), vec![4, 5]);
    }

    #[rstest]
    fn test_to_unique_method() {
        let distinct: Vec<char> = "mississippi".chars().to_unique(OrderingSpec::natural()).collect();
        assert_eq!(distinct, vec!['m', 'i', 's', 'p']);
    }

    #[rstest]
    fn test_cursor_is_object_safe() {
        let mut cursor: Box<dyn Cursor<Item = i32>> = Box::new(take(vec![1, 2], 1));
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Some(1));
        assert!(!cursor.has_next());
    }
}
