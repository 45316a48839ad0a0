//! Container shapes.
//!
//! The algorithms in this crate are written once against two small traits:
//!
//! - [`Sequence`]: the container can be iterated (yielding owned, cloned
//!   elements) and knows its length
//! - [`Shaped`]: the container can produce an empty container of the "same
//!   kind" to receive results
//!
//! `Vec` in gives `Vec` out, `BTreeSet` in gives `BTreeSet` out, a map's
//! entries go back into a map of the same type. Slices and arrays are not
//! growable, so their similar container is a `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::shape::{Sequence, Shaped};
//! use std::collections::BTreeSet;
//!
//! let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
//! let copy = set.collect_similar(set.elements().filter(|value| *value > 1));
//! assert_eq!(copy.into_iter().collect::<Vec<_>>(), vec![2, 3]);
//!
//! let slice: &[i32] = &[1, 2, 3];
//! let similar: Vec<i32> = slice.collect_similar(slice.elements().map(|value| value * 10));
//! assert_eq!(similar, vec![10, 20, 30]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};

/// A finite container that can be traversed in its iteration order.
pub trait Sequence {
    /// The element type. Map entries are `(K, V)` pairs.
    type Item;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns `true` if the container has no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Iterates over clones of the elements.
    fn elements(&self) -> impl Iterator<Item = Self::Item> + '_;
}

/// A [`Sequence`] that can create an empty container of the same kind.
pub trait Shaped: Sequence {
    /// The container type produced by copy-producing operations.
    type Similar: Extend<Self::Item>;

    /// Returns an empty container of the same kind.
    fn similar_empty(&self) -> Self::Similar;

    /// Returns a container of the same kind holding `items`.
    fn collect_similar<I>(&self, items: I) -> Self::Similar
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut similar = self.similar_empty();
        similar.extend(items);
        similar
    }
}

// =============================================================================
// Slices and arrays
// =============================================================================

impl<T: Clone> Sequence for [T] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T: Clone> Shaped for [T] {
    type Similar = Vec<T>;

    fn similar_empty(&self) -> Vec<T> {
        Vec::with_capacity(self.len())
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        N
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T: Clone, const N: usize> Shaped for [T; N] {
    type Similar = Vec<T>;

    fn similar_empty(&self) -> Vec<T> {
        Vec::with_capacity(N)
    }
}

// =============================================================================
// Lists
// =============================================================================

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T: Clone> Shaped for Vec<T> {
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T: Clone> Shaped for VecDeque<T> {
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone> Sequence for LinkedList<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T: Clone> Shaped for LinkedList<T> {
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::new()
    }
}

// =============================================================================
// Sets
// =============================================================================

impl<T: Clone, S> Sequence for HashSet<T, S> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T, S> Shaped for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }
}

impl<T: Clone> Sequence for BTreeSet<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T: Clone + Ord> Shaped for BTreeSet<T> {
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone, S> Sequence for IndexSet<T, S> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}

impl<T, S> Shaped for IndexSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }
}

// =============================================================================
// Maps (iterated as entries)
// =============================================================================

impl<K: Clone, V: Clone, S> Sequence for IndexMap<K, V, S> {
    type Item = (K, V);

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.iter().map(|(key, value)| (key.clone(), value.clone()))
    }
}

impl<K, V, S> Shaped for IndexMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }
}

impl<K: Clone, V: Clone> Sequence for BTreeMap<K, V> {
    type Item = (K, V);

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.iter().map(|(key, value)| (key.clone(), value.clone()))
    }
}

impl<K: Clone + Ord, V: Clone> Shaped for BTreeMap<K, V> {
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, S> Sequence for HashMap<K, V, S> {
    type Item = (K, V);

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.iter().map(|(key, value)| (key.clone(), value.clone()))
    }
}

impl<K, V, S> Shaped for HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Similar = Self;

    fn similar_empty(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }
}
