//! `take_while`: yield the longest prefix satisfying a predicate.

use std::fmt;
use std::iter::FusedIterator;

use super::Cursor;
use super::lookahead::{Advance, Lookahead};

/// Created by [`take_while`].
pub struct TakeWhile<I: Iterator, P> {
    source: I,
    predicate: P,
    slot: Lookahead<I::Item>,
}

impl<I, P> Advance for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Element = I::Item;

    fn slot(&mut self) -> &mut Lookahead<I::Item> {
        &mut self.slot
    }

    fn advance(&mut self) {
        self.slot = match self.source.next() {
            Some(element) if (self.predicate)(&element) => Lookahead::Buffered(element),
            _ => Lookahead::Exhausted,
        };
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.poll_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.slot {
            Lookahead::Exhausted => (0, Some(0)),
            slot => {
                let buffered = usize::from(slot.is_buffered());
                let upper = self.source.size_hint().1;
                (buffered, upper.and_then(|upper| upper.checked_add(buffered)))
            }
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I, P> Cursor for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    fn has_next(&mut self) -> bool {
        self.poll_has_next()
    }
}

impl<I, P> fmt::Debug for TakeWhile<I, P>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TakeWhile")
            .field("source", &self.source)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

/// Yields elements of `source` while `predicate` holds.
///
/// The first element is examined when the cursor is created. The element on
/// which the predicate first fails is consumed from the source but never
/// yielded, and nothing after it is pulled.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::take_while;
///
/// let taken: Vec<i32> = take_while(vec![1, 3, 2], |value| *value < 3).collect();
/// assert_eq!(taken, vec![1]);
/// ```
pub fn take_while<I, P>(source: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut cursor = TakeWhile {
        source: source.into_iter(),
        predicate,
        slot: Lookahead::Pending,
    };
    cursor.advance();
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 3, 2], vec![1])]
    #[case(vec![1, 2], vec![1, 2])]
    #[case(vec![5, 1], vec![])]
    #[case(vec![], vec![])]
    fn test_take_while_less_than_three(#[case] source: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(take_while(source, |value| *value < 3).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_predicate_runs_at_construction() {
        let calls = std::cell::Cell::new(0);
        let cursor = take_while(vec![1, 2, 3], |_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(cursor.count(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_stops_pulling_after_failure() {
        let mut source = vec![1, 9, 2, 3].into_iter();
        let taken: Vec<i32> = take_while(source.by_ref(), |value| *value < 5).collect();
        assert_eq!(taken, vec![1]);
        assert_eq!(source.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_has_next_reports_eager_exhaustion() {
        let mut cursor = take_while(vec![7], |value| *value < 3);
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    fn test_infinite_source() {
        let taken: Vec<u32> = take_while(1.., |value| *value <= 4).collect();
        assert_eq!(taken, vec![1, 2, 3, 4]);
    }
}
