//! Lazy deduplication of a single-pass source.
//!
//! [`ToUnique`] remembers every element it has yielded in a sorted buffer
//! and looks each candidate up with a binary search under the comparator,
//! so each step costs O(log n) comparisons. The buffer stays inline for the
//! first few elements and spills to the heap afterwards.
//!
//! The comparator must be a total order for the lookup to be meaningful;
//! an inconsistent comparator may let a duplicate through.

use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::Cursor;
use super::lookahead::{Advance, Lookahead};
use crate::ordering::{Comparator, OrderingAdapter, OrderingSpec};

/// Number of seen elements kept inline before spilling to the heap.
const INLINE_SEEN: usize = 8;

/// Created by [`to_unique`].
pub struct ToUnique<'a, I: Iterator> {
    source: I,
    comparator: Comparator<'a, I::Item>,
    seen: SmallVec<[I::Item; INLINE_SEEN]>,
    slot: Lookahead<I::Item>,
}

impl<I> ToUnique<'_, I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Records `element` as seen, returning `false` if an equal element was
    /// already recorded.
    fn remember(&mut self, element: &I::Item) -> bool {
        let comparator = &self.comparator;
        match self
            .seen
            .binary_search_by(|existing| comparator(existing, element))
        {
            Ok(_) => false,
            Err(position) => {
                self.seen.insert(position, element.clone());
                true
            }
        }
    }

    /// Returns the number of distinct elements seen so far.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl<I> Advance for ToUnique<'_, I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Element = I::Item;

    fn slot(&mut self) -> &mut Lookahead<I::Item> {
        &mut self.slot
    }

    fn advance(&mut self) {
        while let Some(element) = self.source.next() {
            if self.remember(&element) {
                self.slot = Lookahead::Buffered(element);
                return;
            }
        }
        self.slot = Lookahead::Exhausted;
    }
}

impl<I> Iterator for ToUnique<'_, I>
where
    I: Iterator,
    I::Item: Clone,
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

impl<I> FusedIterator for ToUnique<'_, I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I> Cursor for ToUnique<'_, I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn has_next(&mut self) -> bool {
        self.poll_has_next()
    }
}

impl<I> fmt::Debug for ToUnique<'_, I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ToUnique")
            .field("source", &self.source)
            .field("seen", &self.seen)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

/// Lazily yields the first occurrence of each distinct element of `source`.
///
/// Two elements are duplicates when the comparator built from `spec`
/// reports them equal. The first distinct element is looked for when the
/// cursor is created.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::to_unique;
/// use lambars_seq::ordering::OrderingSpec;
///
/// let distinct: Vec<i32> = to_unique(vec![1, 3, 3, 2, 1], OrderingSpec::natural()).collect();
/// assert_eq!(distinct, vec![1, 3, 2]);
///
/// let by_length: Vec<&str> =
///     to_unique(vec!["a", "bb", "c", "dd", "eee"], OrderingSpec::by_key(|word: &&str| word.len()))
///         .collect();
/// assert_eq!(by_length, vec!["a", "bb", "eee"]);
/// ```
pub fn to_unique<'a, I>(source: I, spec: OrderingSpec<'a, I::Item>) -> ToUnique<'a, I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone + 'a,
{
    let mut cursor = ToUnique {
        source: source.into_iter(),
        comparator: OrderingAdapter::build(spec),
        seen: SmallVec::new(),
        slot: Lookahead::Pending,
    };
    cursor.advance();
    cursor
}
