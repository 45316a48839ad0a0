//! Count-bounded cursors: `take`, `drop` and `tail`.

use std::iter::FusedIterator;

use super::Cursor;
use super::lookahead::{Advance, Lookahead};
use crate::error::{SequenceError, SequenceResult};

/// Yields at most a fixed number of elements. Created by [`take`].
#[derive(Debug, Clone)]
pub struct Take<I: Iterator> {
    source: I,
    remaining: usize,
    slot: Lookahead<I::Item>,
}

impl<I: Iterator> Advance for Take<I> {
    type Element = I::Item;

    fn slot(&mut self) -> &mut Lookahead<I::Item> {
        &mut self.slot
    }

    fn advance(&mut self) {
        if self.remaining == 0 {
            self.slot = Lookahead::Exhausted;
            return;
        }
        self.slot = Lookahead::from_pulled(self.source.next());
        if self.slot.is_buffered() {
            self.remaining -= 1;
        }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.poll_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.slot {
            Lookahead::Exhausted => (0, Some(0)),
            slot => {
                let buffered = usize::from(slot.is_buffered());
                let (lower, upper) = self.source.size_hint();
                let lower = lower.min(self.remaining) + buffered;
                let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
                (lower, Some(upper + buffered))
            }
        }
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

impl<I: Iterator> Cursor for Take<I> {
    fn has_next(&mut self) -> bool {
        self.poll_has_next()
    }
}

/// Yields the remainder of its source, optionally starting with one element
/// that was pulled while the source was being positioned.
///
/// Returned by [`drop`], [`tail`] and [`drop_while`](super::drop_while).
#[derive(Debug, Clone)]
pub struct PassThrough<I: Iterator> {
    source: I,
    slot: Lookahead<I::Item>,
}

impl<I: Iterator> PassThrough<I> {
    pub(crate) const fn new(source: I, slot: Lookahead<I::Item>) -> Self {
        Self { source, slot }
    }
}

impl<I: Iterator> Advance for PassThrough<I> {
    type Element = I::Item;

    fn slot(&mut self) -> &mut Lookahead<I::Item> {
        &mut self.slot
    }

    fn advance(&mut self) {
        self.slot = Lookahead::from_pulled(self.source.next());
    }
}

impl<I: Iterator> Iterator for PassThrough<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.poll_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.slot {
            Lookahead::Exhausted => (0, Some(0)),
            slot => {
                let buffered = usize::from(slot.is_buffered());
                let (lower, upper) = self.source.size_hint();
                (
                    lower.saturating_add(buffered),
                    upper.and_then(|upper| upper.checked_add(buffered)),
                )
            }
        }
    }
}

impl<I: Iterator> FusedIterator for PassThrough<I> {}

impl<I: Iterator> Cursor for PassThrough<I> {
    fn has_next(&mut self) -> bool {
        self.poll_has_next()
    }
}

/// Yields at most `count` elements of `source`. A `count` of zero or less
/// yields nothing, and the source is not touched.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::take;
///
/// assert_eq!(take(1..10, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(take(1..3, 5).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(take(1..3, -1).count(), 0);
/// ```
pub fn take<I: IntoIterator>(source: I, count: isize) -> Take<I::IntoIter> {
    Take {
        source: source.into_iter(),
        remaining: count.max(0).unsigned_abs(),
        slot: Lookahead::Pending,
    }
}

/// Discards the first `count` elements of `source` immediately, then yields
/// the rest.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::drop;
///
/// assert_eq!(drop(1..6, 2).collect::<Vec<_>>(), vec![3, 4, 5]);
/// assert_eq!(drop(1..3, 10).count(), 0);
/// assert_eq!(drop(1..3, -4).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn drop<I: IntoIterator>(source: I, count: isize) -> PassThrough<I::IntoIter> {
    let mut source = source.into_iter();
    let mut slot = Lookahead::Pending;
    for _ in 0..count.max(0) {
        if source.next().is_none() {
            slot = Lookahead::Exhausted;
            break;
        }
    }
    PassThrough::new(source, slot)
}

/// Discards exactly the first element of `source`, then yields the rest.
///
/// # Errors
///
/// Returns an empty-structure error if `source` yields nothing.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::tail;
///
/// assert_eq!(tail(1..4).unwrap().collect::<Vec<_>>(), vec![2, 3]);
/// assert!(tail(std::iter::empty::<i32>()).is_err());
/// ```
pub fn tail<I: IntoIterator>(source: I) -> SequenceResult<PassThrough<I::IntoIter>> {
    let mut source = source.into_iter();
    match source.next() {
        Some(_) => Ok(PassThrough::new(source, Lookahead::Pending)),
        None => Err(SequenceError::empty("tail", "Iterator")),
    }
}
