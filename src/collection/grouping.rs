//! Partitioning a sequence by computed keys.
//!
//! All produced maps are [`GroupMap`]s: insertion-ordered, so keys appear in
//! the order they were first computed, and hashed with [`GroupHasher`]. The
//! `fxhash` and `ahash` features swap the hasher for a faster one; with
//! neither enabled the standard library's `RandomState` is used.
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::collection::{count_by, group_by};
//!
//! let values: Vec<i32> = (1..=6).collect();
//! let groups = group_by(&values, |value| value % 2);
//! assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 0]);
//! assert_eq!(groups[&1], vec![1, 3, 5]);
//! assert_eq!(groups[&0], vec![2, 4, 6]);
//!
//! let counts = count_by(&["a", "bb", "cc", "d"], |word| word.len());
//! assert_eq!(counts[&1], 2);
//! ```

use std::hash::Hash;

use indexmap::IndexMap;

use crate::shape::Sequence;

/// The hasher of every map produced by this module.
#[cfg(feature = "fxhash")]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// The hasher of every map produced by this module.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type GroupHasher = ahash::RandomState;

/// The hasher of every map produced by this module.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type GroupHasher = std::hash::RandomState;

/// An insertion-ordered map hashed with [`GroupHasher`].
pub type GroupMap<K, V> = IndexMap<K, V, GroupHasher>;

/// A key function accepted by [`group_by_all`].
pub type GroupKey<'a, T, K> = &'a dyn Fn(&T) -> K;

fn new_group_map<K, V>() -> GroupMap<K, V> {
    GroupMap::with_hasher(GroupHasher::default())
}

// =============================================================================
// Grouping
// =============================================================================

/// The result of grouping by several keys in turn.
///
/// Each level of nesting corresponds to one key function; the innermost
/// level holds the elements themselves.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Grouping<K, T> {
    /// Elements that share every key on the path leading here.
    Leaf(Vec<T>),
    /// Sub-groups keyed by the next key function.
    Nested(GroupMap<K, Grouping<K, T>>),
}

impl<K, T> Grouping<K, T> {
    /// Returns the elements if this is a leaf.
    pub fn leaf(&self) -> Option<&[T]> {
        match self {
            Self::Leaf(elements) => Some(elements),
            Self::Nested(_) => None,
        }
    }

    /// Returns the sub-groups if this is not a leaf.
    pub const fn nested(&self) -> Option<&GroupMap<K, Self>> {
        match self {
            Self::Nested(groups) => Some(groups),
            Self::Leaf(_) => None,
        }
    }

    /// Follows `path` one key per level.
    pub fn get_path(&self, path: &[K]) -> Option<&Self>
    where
        K: Hash + Eq,
    {
        path.iter()
            .try_fold(self, |grouping, key| grouping.nested()?.get(key))
    }

    /// Returns every element, leaf by leaf, in group order.
    pub fn flatten(self) -> Vec<T> {
        match self {
            Self::Leaf(elements) => elements,
            Self::Nested(groups) => groups.into_values().flat_map(Self::flatten).collect(),
        }
    }
}

impl<K: Hash + Eq, T: PartialEq> PartialEq for Grouping<K, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(left), Self::Leaf(right)) => left == right,
            (Self::Nested(left), Self::Nested(right)) => left == right,
            _ => false,
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Groups the elements of `sequence` by `key`.
///
/// Each element lands in exactly one group; within a group, elements keep
/// their source order.
pub fn group_by<S, K, F>(sequence: &S, mut key: F) -> GroupMap<K, Vec<S::Item>>
where
    S: Sequence + ?Sized,
    K: Hash + Eq,
    F: FnMut(&S::Item) -> K,
{
    let mut groups = new_group_map();
    for element in sequence.elements() {
        groups
            .entry(key(&element))
            .or_insert_with(Vec::new)
            .push(element);
    }
    groups
}

/// Groups by the first key function, then each group by the next one, and
/// so on.
///
/// Every key function adds one level of nesting. An empty key list adds
/// none and returns all elements as a single leaf; use
/// [`group_by_identity`] to group elements by themselves.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::{GroupKey, group_by_all};
/// use lambars_seq::ordering::Value;
///
/// let values: Vec<i32> = (1..=8).collect();
/// let parity: GroupKey<'_, i32, Value> = &|value| Value::from(value % 2 == 0);
/// let small: GroupKey<'_, i32, Value> = &|value| Value::from(*value <= 4);
/// let grouping = group_by_all(&values, &[parity, small]);
///
/// let path = [Value::Bool(true), Value::Bool(false)];
/// assert_eq!(grouping.get_path(&path).and_then(|group| group.leaf()), Some(&[6, 8][..]));
/// ```
pub fn group_by_all<S, K>(
    sequence: &S,
    keys: &[GroupKey<'_, S::Item, K>],
) -> Grouping<K, S::Item>
where
    S: Sequence + ?Sized,
    K: Hash + Eq,
{
    match keys.split_first() {
        Some((head, rest)) => Grouping::Nested(nest(sequence.elements(), head, rest)),
        None => Grouping::Leaf(sequence.elements().collect()),
    }
}

/// Groups elements by themselves, converted into keys with `K::from`.
///
/// Elements that are equal as keys share a group; the group keeps every
/// occurrence.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::group_by_identity;
/// use lambars_seq::ordering::Value;
///
/// let grouping = group_by_identity::<_, Value>(&vec![2, 1, 2]);
/// let path = [Value::Double(2.0)];
/// assert_eq!(grouping.get_path(&path).and_then(|group| group.leaf()), Some(&[2, 2][..]));
/// ```
pub fn group_by_identity<S, K>(sequence: &S) -> Grouping<K, S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Hash + Eq + From<S::Item>,
{
    Grouping::Nested(nest(
        sequence.elements(),
        |element: &S::Item| K::from(element.clone()),
        &[],
    ))
}

fn nest<T, K, I, F>(elements: I, head: F, rest: &[GroupKey<'_, T, K>]) -> GroupMap<K, Grouping<K, T>>
where
    I: Iterator<Item = T>,
    F: Fn(&T) -> K,
    K: Hash + Eq,
{
    let mut buckets: GroupMap<K, Vec<T>> = new_group_map();
    for element in elements {
        buckets.entry(head(&element)).or_default().push(element);
    }
    buckets
        .into_iter()
        .map(|(key, members)| {
            let child = match rest.split_first() {
                Some((next, deeper)) => Grouping::Nested(nest(members.into_iter(), next, deeper)),
                None => Grouping::Leaf(members),
            };
            (key, child)
        })
        .collect()
}

/// Counts the elements of `sequence` per key.
pub fn count_by<S, K, F>(sequence: &S, mut key: F) -> GroupMap<K, usize>
where
    S: Sequence + ?Sized,
    K: Hash + Eq,
    F: FnMut(&S::Item) -> K,
{
    let mut counts = new_group_map();
    for element in sequence.elements() {
        *counts.entry(key(&element)).or_insert(0) += 1;
    }
    counts
}

/// Builds a map from the `(key, value)` pair computed for each element.
///
/// A repeated key takes the later value but keeps the position where it was
/// first inserted.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::collect_entries;
///
/// let entries = collect_entries(&["b", "a", "bb"], |word| (word.chars().next(), word.len()));
/// assert_eq!(
///     entries.into_iter().collect::<Vec<_>>(),
///     vec![(Some('b'), 2), (Some('a'), 1)]
/// );
/// ```
pub fn collect_entries<S, K, V, F>(sequence: &S, mut entry: F) -> GroupMap<K, V>
where
    S: Sequence + ?Sized,
    K: Hash + Eq,
    F: FnMut(&S::Item) -> (K, V),
{
    let mut entries = new_group_map();
    for element in sequence.elements() {
        let (key, value) = entry(&element);
        entries.insert(key, value);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::Value;
    use rstest::rstest;

    #[rstest]
    fn test_group_by_keeps_first_seen_key_order() {
        let groups = group_by(&vec![3, 1, 4, 1, 5, 9, 2, 6], |value| value % 3);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(groups[&0], vec![3, 9, 6]);
        assert_eq!(groups[&1], vec![1, 4, 1]);
        assert_eq!(groups[&2], vec![5, 2]);
    }

    #[rstest]
    fn test_group_by_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(group_by(&empty, |value| *value).is_empty());
    }

    #[rstest]
    fn test_number_aware_keys_share_a_group() {
        let groups = group_by(&vec![1, 2, 3], |value| {
            if value % 2 == 0 {
                Value::Double(1.0)
            } else {
                Value::Int(1)
            }
        });
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&Value::Long(1)], vec![1, 2, 3]);
    }

    #[rstest]
    fn test_group_by_identity() {
        let grouping = group_by_identity::<_, Value>(&vec![2, 1, 2]);
        let groups = grouping.nested().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&Value::Int(2)].leaf(), Some(&[2, 2][..]));
    }

    #[rstest]
    fn test_group_by_all_without_keys_is_one_leaf() {
        let grouping = group_by_all::<_, usize>(&vec![2, 1, 2], &[]);
        assert_eq!(grouping.leaf(), Some(&[2, 1, 2][..]));
    }

    #[rstest]
    fn test_group_by_all_keys_need_no_conversion_from_elements() {
        let words = vec!["fig", "kiwi", "plum", "pear", "apple"];
        let length: GroupKey<'_, &str, usize> = &|word| word.len();
        let grouping = group_by_all(&words, &[length]);
        assert_eq!(
            grouping.get_path(&[4]).and_then(Grouping::leaf),
            Some(&["kiwi", "plum", "pear"][..])
        );
        assert_eq!(grouping.get_path(&[5]).and_then(Grouping::leaf), Some(&["apple"][..]));
    }

    #[rstest]
    fn test_group_by_all_single_key_matches_group_by() {
        let values: Vec<i32> = (1..=6).collect();
        let key: GroupKey<'_, i32, Value> = &|value| Value::from(value % 3);
        let grouping = group_by_all(&values, &[key]);
        let plain = group_by(&values, |value| Value::from(value % 3));
        for (group_key, members) in plain {
            assert_eq!(grouping.get_path(&[group_key]).and_then(Grouping::leaf), Some(&members[..]));
        }
    }

    #[rstest]
    fn test_flatten_returns_elements_in_group_order() {
        let values = vec![1, 2, 3, 4];
        let key: GroupKey<'_, i32, Value> = &|value| Value::from(value % 2);
        assert_eq!(group_by_all(&values, &[key]).flatten(), vec![1, 3, 2, 4]);
    }

    #[rstest]
    fn test_count_by() {
        let counts = count_by(&vec!["x", "yy", "zz", "w"], |word| word.len());
        assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![(1, 2), (2, 2)]);
    }

    #[rstest]
    fn test_collect_entries_overwrites_in_place() {
        let entries = collect_entries(&vec![1, 2, 3, 4], |value| (value % 2, *value));
        assert_eq!(entries.into_iter().collect::<Vec<_>>(), vec![(1, 3), (0, 4)]);
    }
}
