//! Pairing elements with a running counter.

use std::fmt;
use std::iter::FusedIterator;

use indexmap::IndexMap;

use super::Cursor;
use super::lookahead::{Advance, Lookahead};

/// Yields `(index, element)` pairs. Created by [`indexed`].
#[derive(Debug, Clone)]
pub struct Indexed<I: Iterator> {
    source: I,
    counter: isize,
    slot: Lookahead<(isize, I::Item)>,
}

impl<I: Iterator> Advance for Indexed<I> {
    type Element = (isize, I::Item);

    fn slot(&mut self) -> &mut Lookahead<(isize, I::Item)> {
        &mut self.slot
    }

    fn advance(&mut self) {
        self.slot = Lookahead::from_pulled(self.source.next().map(|element| {
            let index = self.counter;
            self.counter += 1;
            (index, element)
        }));
    }
}

impl<I: Iterator> Iterator for Indexed<I> {
    type Item = (isize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        self.poll_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.slot.is_buffered());
        if self.slot.is_exhausted() {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> FusedIterator for Indexed<I> {}

impl<I: Iterator> Cursor for Indexed<I> {
    fn has_next(&mut self) -> bool {
        self.poll_has_next()
    }
}

/// Yields `(element, index)` pairs. Created by [`with_index`].
pub struct WithIndex<I: Iterator> {
    inner: Indexed<I>,
}

impl<I> Clone for WithIndex<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I> fmt::Debug for WithIndex<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WithIndex")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<I: Iterator> Iterator for WithIndex<I> {
    type Item = (I::Item, isize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, element)| (element, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Iterator> FusedIterator for WithIndex<I> {}

impl<I: Iterator> Cursor for WithIndex<I> {
    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }
}

/// Pairs every element with a counter starting at `offset`, index first.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::indexed;
///
/// let pairs: Vec<(isize, char)> = indexed("ab".chars(), 5).collect();
/// assert_eq!(pairs, vec![(5, 'a'), (6, 'b')]);
/// ```
pub fn indexed<I: IntoIterator>(source: I, offset: isize) -> Indexed<I::IntoIter> {
    Indexed {
        source: source.into_iter(),
        counter: offset,
        slot: Lookahead::Pending,
    }
}

/// Pairs every element with a counter starting at `offset`, element first.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::with_index;
///
/// let pairs: Vec<(&str, isize)> = with_index(vec!["x", "y"], 0).collect();
/// assert_eq!(pairs, vec![("x", 0), ("y", 1)]);
/// ```
pub fn with_index<I: IntoIterator>(source: I, offset: isize) -> WithIndex<I::IntoIter> {
    WithIndex {
        inner: indexed(source, offset),
    }
}

/// Collects `source` into a map from position (starting at `offset`) to
/// element, in iteration order.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::iter::indexed_map;
///
/// let map = indexed_map(vec!["a", "b"], 1);
/// assert_eq!(map.get(&2), Some(&"b"));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn indexed_map<I: IntoIterator>(source: I, offset: isize) -> IndexMap<isize, I::Item> {
    indexed(source, offset).collect()
}
