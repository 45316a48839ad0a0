//! `init`: every element except the last.

use std::iter::FusedIterator;

use super::Cursor;
use super::lookahead::{Advance, Lookahead};
use crate::error::{SequenceError, SequenceResult};

/// Created by [`init`].
///
/// Holds one element back: an element is only released once its successor
/// has been pulled, so the final element of the source is never yielded.
#[derive(Debug, Clone)]
pub struct Init<I: Iterator> {
    source: I,
    held: Option<I::Item>,
    slot: Lookahead<I::Item>,
}

impl<I: Iterator> Advance for Init<I> {
    type Element = I::Item;

    fn slot(&mut self) -> &mut Lookahead<I::Item> {
        &mut self.slot
    }

    fn advance(&mut self) {
        self.slot = match (self.held.take(), self.source.next()) {
            (Some(held), Some(successor)) => {
                self.held = Some(successor);
                Lookahead::Buffered(held)
            }
            _ => Lookahead::Exhausted,
        };
    }
}

impl<I: Iterator> Iterator for Init<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.poll_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.slot {
            Lookahead::Exhausted => (0, Some(0)),
            slot => {
                // The held element balances the one that will be dropped.
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

impl<I: Iterator> FusedIterator for Init<I> {}

impl<I: Iterator> Cursor for Init<I> {
    fn has_next(&mut self) -> bool {
        self.poll_has_next()
    }
}

/// Yields every element of `source` except the last.
///
/// # Errors
///
/// Returns an empty-structure error if `source` yields nothing.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::init;
///
/// assert_eq!(init(1..=4).unwrap().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(init(vec!['a']).unwrap().count(), 0);
/// assert!(init(Vec::<i32>::new()).is_err());
/// ```
pub fn init<I: IntoIterator>(source: I) -> SequenceResult<Init<I::IntoIter>> {
    let mut source = source.into_iter();
    let first = source
        .next()
        .ok_or_else(|| SequenceError::empty("init", "Iterator"))?;
    let mut cursor = Init {
        source,
        held: Some(first),
        slot: Lookahead::Pending,
    };
    cursor.advance();
    Ok(cursor)
}
