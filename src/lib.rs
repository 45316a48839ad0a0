//! # lambars-seq
//!
//! Generic, closure-customizable sequence algorithms that behave the same
//! whether the input is a list, a set, a map's entries, a slice or a
//! single-pass iterator.
//!
//! ## Overview
//!
//! - **Ordering**: one [`OrderingSpec`](ordering::OrderingSpec) type covers
//!   natural order, explicit comparators and arity-tagged callbacks, with
//!   number-aware equality (`2 == 2.0`) as the natural rule
//! - **Shapes**: [`Sequence`](shape::Sequence) and [`Shaped`](shape::Shaped)
//!   let results come back in the same kind of container as the input
//! - **Collections**: dedup, sort, collate/chop, grouping, set algebra,
//!   bounded slicing, element access and splice assignment
//! - **Iterators**: buffering single-pass cursors (`take`, `drop`,
//!   `take_while`, `drop_while`, `init`, `tail`, `drop_right`, `indexed`,
//!   `to_unique`) that answer `has_next()` without consuming
//!
//! ## Feature Flags
//!
//! - `shuffle` (default): random permutation with an injected generator
//! - `serde`: serialization of [`Value`](ordering::Value),
//!   [`Grouping`](collection::Grouping) and [`SequenceError`](error::SequenceError)
//! - `fxhash` / `ahash`: faster hashers for the maps built by grouping
//! - `full`: `shuffle` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use lambars_seq::prelude::*;
//!
//! let values = vec![3, 1, 3, 2, 1];
//! assert_eq!(unique(&values, OrderingSpec::natural()), vec![3, 1, 2]);
//! assert_eq!(to_sorted(&values, OrderingSpec::natural()), vec![1, 1, 2, 3, 3]);
//!
//! let windows = collate_by_size(&values, 2);
//! assert_eq!(windows, vec![vec![3, 1], vec![3, 2], vec![1]]);
//!
//! let firsts: Vec<i32> = values.into_iter().take_while_buffered(|value| *value != 2).collect();
//! assert_eq!(firsts, vec![3, 1, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the ordering types, the shape traits, the collection
/// algorithms and the iterator extension trait. The bounded slicing
/// functions (`take`, `drop`, `init`, ...) exist for both collections and
/// iterators and are left out; reach them through
/// [`collection`](crate::collection) or [`iter`](crate::iter).
///
/// # Usage
///
/// ```rust
/// use lambars_seq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{
        GroupKey, GroupMap, Grouping, chop, collate, collate_by_size, collect_entries, count_by,
        disjoint, first, group_by, group_by_all, group_by_identity, head, inject, inject_with,
        intersect, last, max, min, minus, plus, pop, put_at, remove_last, sort_in_place, to_sorted,
        to_unique, unique, unique_in_place,
    };
    #[cfg(feature = "shuffle")]
    pub use crate::collection::{shuffle, shuffle_default, shuffled, shuffled_default};
    pub use crate::error::{SequenceError, SequenceResult};
    pub use crate::iter::{Cursor, SequencePipeline};
    pub use crate::ordering::*;
    pub use crate::shape::{Sequence, Shaped};
}

pub mod collection;
pub mod error;
pub mod iter;
pub mod ordering;
pub mod shape;
