//! `drop_right` and `take_right`: trimming from the end of a single-pass source.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::Cursor;
use super::lookahead::{Advance, Lookahead};

/// Created by [`drop_right`].
///
/// Keeps a sliding window of `count + 1` pulled elements and releases the
/// oldest one only when the window is full, so the last `count` elements
/// of the source are never yielded.
#[derive(Debug, Clone)]
pub struct DropRight<I: Iterator> {
    source: I,
    count: usize,
    window: VecDeque<I::Item>,
    source_done: bool,
    slot: Lookahead<I::Item>,
}

impl<I: Iterator> Advance for DropRight<I> {
    type Element = I::Item;

    fn slot(&mut self) -> &mut Lookahead<I::Item> {
        &mut self.slot
    }

    fn advance(&mut self) {
        while self.window.len() <= self.count && !self.source_done {
            match self.source.next() {
                Some(element) => self.window.push_back(element),
                None => self.source_done = true,
            }
        }
        self.slot = if self.window.len() > self.count {
            Lookahead::from_pulled(self.window.pop_front())
        } else {
            self.window.clear();
            Lookahead::Exhausted
        };
    }
}

impl<I: Iterator> Iterator for DropRight<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.poll_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.slot.is_exhausted() {
            return (0, Some(0));
        }
        let pending = self.window.len() + usize::from(self.slot.is_buffered());
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(pending).saturating_sub(self.count),
            upper
                .and_then(|upper| upper.checked_add(pending))
                .map(|upper| upper.saturating_sub(self.count)),
        )
    }
}

impl<I: Iterator> FusedIterator for DropRight<I> {}

impl<I: Iterator> Cursor for DropRight<I> {
    fn has_next(&mut self) -> bool {
        self.poll_has_next()
    }
}

/// Yields every element of `source` except the last `count`.
///
/// A `count` of zero or less passes every element through. The window is
/// filled when the cursor is created.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::drop_right;
///
/// assert_eq!(drop_right(1..=5, 2).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(drop_right(1..=2, 5).count(), 0);
/// assert_eq!(drop_right(1..=2, 0).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn drop_right<I: IntoIterator>(source: I, count: isize) -> DropRight<I::IntoIter> {
    let count = count.max(0).unsigned_abs();
    let mut cursor = DropRight {
        source: source.into_iter(),
        count,
        window: VecDeque::with_capacity(count.saturating_add(1).min(64)),
        source_done: false,
        slot: Lookahead::Pending,
    };
    cursor.advance();
    cursor
}

/// Returns the last `count` elements of `source`, in order.
///
/// The whole source is consumed; only `count` elements are retained at a
/// time. A `count` of zero or less returns nothing.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::take_right;
///
/// assert_eq!(take_right(1..=5, 2).collect::<Vec<_>>(), vec![4, 5]);
/// assert_eq!(take_right(1..=2, 5).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn take_right<I: IntoIterator>(
    source: I,
    count: isize,
) -> std::collections::vec_deque::IntoIter<I::Item> {
    let count = count.max(0).unsigned_abs();
    let mut window = VecDeque::with_capacity(count.min(64));
    if count > 0 {
        for element in source {
            if window.len() == count {
                window.pop_front();
            }
            window.push_back(element);
        }
    }
    window.into_iter()
}
