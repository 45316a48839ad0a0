//! Ordering rules and the number-aware equality relation.
//!
//! Every algorithm that needs to decide whether two elements are "the same"
//! or which one comes first takes an [`OrderingSpec`]:
//!
//! - [`OrderingSpec::Natural`]: the element type's [`NumberAware`] order
//! - [`OrderingSpec::Comparator`]: an explicit `Fn(&T, &T) -> Ordering`
//! - [`OrderingSpec::Callback`]: a [`Callback`] tagged with its arity, either a
//!   key extractor or a comparator
//!
//! [`OrderingAdapter::build`] collapses any of these into one [`Comparator`].
//! Equality everywhere in the crate means "the comparator returns
//! `Ordering::Equal`".
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::ordering::{OrderingAdapter, OrderingSpec, Value};
//! use std::cmp::Ordering;
//!
//! // Natural order treats 2 and 2.0 as the same number.
//! let compare = OrderingAdapter::build(OrderingSpec::<Value>::natural());
//! assert_eq!(compare(&Value::Int(2), &Value::Double(2.0)), Ordering::Equal);
//!
//! // A key extractor compares the extracted keys.
//! let compare = OrderingAdapter::build(OrderingSpec::by_key(|word: &&str| word.len()));
//! assert_eq!(compare(&"cat", &"dog"), Ordering::Equal);
//! ```

mod adapter;
mod callback;
mod number_aware;
mod value;

pub use adapter::{NaturalOrder, OrderingAdapter, OrderingSpec};
pub use callback::{Callback, Comparator, KeyFn};
pub use number_aware::{NumberAware, NumberAwareEquality};
pub use value::Value;
