//! Intersection, difference, disjointness and concatenation.
//!
//! Membership of the left operand's elements in the right operand is decided
//! by the comparator built from the [`OrderingSpec`]. Two lookup strategies
//! exist:
//!
//! - **sorted**: the right operand is sorted once and searched by binary
//!   search. Used for explicit comparators and callbacks, and for natural
//!   order when every element involved is mutually ordered with its
//!   neighbours.
//! - **scan**: every lookup walks the right operand using number-aware
//!   equality. Used for natural order over mixed element families.
//!
//! Both strategies give the same answer for a consistent total order; the
//! choice only affects cost and is logged at `debug` level.

use std::fmt;

use smallvec::SmallVec;

use crate::ordering::{Comparator, OrderingAdapter, OrderingSpec};
use crate::shape::{Sequence, Shaped};

/// Candidates kept inline before spilling to the heap.
const INLINE_CANDIDATES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Sorted,
    Scan,
}

impl fmt::Display for Lookup {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sorted => formatter.write_str("sorted"),
            Self::Scan => formatter.write_str("scan"),
        }
    }
}

/// The right operand, prepared for repeated membership lookups.
struct Membership<'c, 'a, T> {
    comparator: &'c Comparator<'a, T>,
    candidates: SmallVec<[T; INLINE_CANDIDATES]>,
    lookup: Lookup,
}

impl<'c, 'a, T> Membership<'c, 'a, T> {
    fn new<I>(candidates: I, comparator: &'c Comparator<'a, T>, lookup: Lookup) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut candidates: SmallVec<[T; INLINE_CANDIDATES]> = candidates.into_iter().collect();
        if lookup == Lookup::Sorted {
            candidates.sort_by(|left, right| comparator(left, right));
        }
        Self {
            comparator,
            candidates,
            lookup,
        }
    }

    fn contains(&self, element: &T) -> bool {
        let comparator = self.comparator;
        match self.lookup {
            Lookup::Sorted => self
                .candidates
                .binary_search_by(|candidate| comparator(candidate, element))
                .is_ok(),
            Lookup::Scan => self
                .candidates
                .iter()
                .any(|candidate| comparator(element, candidate).is_eq()),
        }
    }
}

fn choose_lookup<T>(spec: &OrderingSpec<'_, T>, left: &[T], right: &[T]) -> Lookup {
    let OrderingSpec::Natural(order) = spec else {
        return Lookup::Sorted;
    };
    let mut combined = left.iter().chain(right);
    let Some(mut previous) = combined.next() else {
        return Lookup::Sorted;
    };
    for element in combined {
        if !order.is_mutually_ordered(previous, element) {
            return Lookup::Scan;
        }
        previous = element;
    }
    Lookup::Sorted
}

/// Splits the left operand into elements that do and do not have an equal
/// counterpart in the right operand, preserving the left operand's order.
fn partition_by_membership<'a, L, R>(
    operation: &str,
    left: &L,
    right: &R,
    spec: OrderingSpec<'a, L::Item>,
) -> (Vec<L::Item>, Vec<L::Item>)
where
    L: Sequence + ?Sized,
    R: Sequence<Item = L::Item> + ?Sized,
    L::Item: 'a,
{
    let left_elements: Vec<L::Item> = left.elements().collect();
    let right_elements: Vec<L::Item> = right.elements().collect();
    let lookup = choose_lookup(&spec, &left_elements, &right_elements);
    log::debug!(
        "{operation}: lookup={lookup} left={} right={}",
        left_elements.len(),
        right_elements.len()
    );
    let comparator = OrderingAdapter::build(spec);
    let membership = Membership::new(right_elements, &comparator, lookup);
    left_elements
        .into_iter()
        .partition(|element| membership.contains(element))
}

/// Returns the elements of `left` that have an equal element in `right`.
///
/// The result has the kind and order of `left`; duplicates in `left` are
/// kept.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::intersect;
/// use lambars_seq::ordering::OrderingSpec;
///
/// let left: Vec<i32> = (1..=5).collect();
/// let right: Vec<i32> = (4..=8).collect();
/// assert_eq!(intersect(&left, &right, OrderingSpec::natural()), vec![4, 5]);
/// ```
pub fn intersect<'a, L, R>(left: &L, right: &R, spec: OrderingSpec<'a, L::Item>) -> L::Similar
where
    L: Shaped + ?Sized,
    R: Sequence<Item = L::Item> + ?Sized,
    L::Item: 'a,
{
    if left.is_empty() || right.is_empty() {
        return left.similar_empty();
    }
    let (kept, _) = partition_by_membership("intersect", left, right, spec);
    left.collect_similar(kept)
}

/// Returns the elements of `left` that have no equal element in `removed`.
///
/// Every occurrence of a removed element is dropped.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::minus;
/// use lambars_seq::ordering::{OrderingSpec, Value};
///
/// let left = vec![Value::Int(1), Value::Double(2.0), Value::Int(1), Value::from("x")];
/// let removed = vec![Value::Long(1)];
/// assert_eq!(
///     minus(&left, &removed, OrderingSpec::natural()),
///     vec![Value::Double(2.0), Value::from("x")]
/// );
/// ```
pub fn minus<'a, L, R>(left: &L, removed: &R, spec: OrderingSpec<'a, L::Item>) -> L::Similar
where
    L: Shaped + ?Sized,
    R: Sequence<Item = L::Item> + ?Sized,
    L::Item: 'a,
{
    if removed.is_empty() {
        return left.collect_similar(left.elements());
    }
    let (_, kept) = partition_by_membership("minus", left, removed, spec);
    left.collect_similar(kept)
}

/// Returns `true` if no element of `left` equals an element of `right`.
///
/// Two sequences are disjoint whenever either of them is empty.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::disjoint;
/// use lambars_seq::ordering::OrderingSpec;
///
/// assert!(disjoint(&[1, 2], &[3, 4], OrderingSpec::natural()));
/// assert!(!disjoint(&[1, 2], &[2, 3], OrderingSpec::natural()));
/// assert!(disjoint(&[1, 2], &[] as &[i32; 0], OrderingSpec::natural()));
/// ```
pub fn disjoint<'a, L, R>(left: &L, right: &R, spec: OrderingSpec<'a, L::Item>) -> bool
where
    L: Sequence + ?Sized,
    R: Sequence<Item = L::Item> + ?Sized,
    L::Item: 'a,
{
    if left.is_empty() || right.is_empty() {
        return true;
    }
    let (shared, _) = partition_by_membership("disjoint", left, right, spec);
    shared.is_empty()
}

/// Returns every element of `left` followed by every element of `right`,
/// in a container of `left`'s kind.
///
/// No deduplication happens beyond what the container kind itself does.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::collection::plus;
/// use std::collections::BTreeSet;
///
/// assert_eq!(plus(&vec![1, 2], &[2, 3]), vec![1, 2, 2, 3]);
///
/// let set: BTreeSet<i32> = [1, 2].into_iter().collect();
/// assert_eq!(plus(&set, &[2, 3]).len(), 3);
/// ```
pub fn plus<L, R>(left: &L, right: &R) -> L::Similar
where
    L: Shaped + ?Sized,
    R: Sequence<Item = L::Item> + ?Sized,
{
    left.collect_similar(left.elements().chain(right.elements()))
}
