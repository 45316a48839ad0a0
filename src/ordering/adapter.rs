//! Turning an ordering specification into one comparator.

use std::cmp::Ordering;
use std::fmt;

use super::{Callback, Comparator, NumberAware};

/// The [`NumberAware`] order of a concrete element type, captured when an
/// [`OrderingSpec::Natural`] is created.
///
/// Only [`OrderingSpec::natural`] requires [`NumberAware`]; comparators and
/// key extractors accept any element type.
pub struct NaturalOrder<T> {
    compare: fn(&T, &T) -> Ordering,
    mutually_ordered: fn(&T, &T) -> bool,
}

impl<T: NumberAware> NaturalOrder<T> {
    /// Captures the number-aware order of `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            compare: T::number_aware_cmp,
            mutually_ordered: T::is_mutually_ordered,
        }
    }
}

impl<T> NaturalOrder<T> {
    /// Compares `left` with `right`.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.compare)(left, right)
    }

    /// Returns `true` if `left` and `right` order meaningfully against each
    /// other.
    #[inline]
    pub fn is_mutually_ordered(&self, left: &T, right: &T) -> bool {
        (self.mutually_ordered)(left, right)
    }
}

impl<T: NumberAware> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NaturalOrder<T> {}

impl<T> fmt::Debug for NaturalOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("NaturalOrder")
    }
}

/// How elements are ordered (and therefore when two elements are equal).
///
/// # Examples
///
/// ```rust
/// use lambars_seq::ordering::{OrderingAdapter, OrderingSpec};
/// use std::cmp::Ordering;
///
/// let compare = OrderingAdapter::build(OrderingSpec::by_key(|text: &&str| text.to_lowercase()));
/// assert_eq!(compare(&"Apple", &"apple"), Ordering::Equal);
///
/// let compare = OrderingAdapter::build(OrderingSpec::comparator(|left: &i32, right: &i32| right.cmp(left)));
/// assert_eq!(compare(&1, &2), Ordering::Greater);
/// ```
pub enum OrderingSpec<'a, T> {
    /// The element type's number-aware natural order.
    Natural(NaturalOrder<T>),
    /// An explicit comparator.
    Comparator(Comparator<'a, T>),
    /// A callback whose arity decides how it is used.
    Callback(Callback<'a, T>),
}

impl<T: NumberAware> OrderingSpec<'_, T> {
    /// Natural order.
    #[must_use]
    pub const fn natural() -> Self {
        Self::Natural(NaturalOrder::new())
    }
}

impl<'a, T> OrderingSpec<'a, T> {
    /// Orders with an explicit comparator.
    pub fn comparator<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self::Comparator(Box::new(function))
    }

    /// Orders by a key extracted from each element.
    pub fn by_key<K, F>(function: F) -> Self
    where
        K: Into<super::Value>,
        F: Fn(&T) -> K + 'a,
    {
        Self::Callback(Callback::key(function))
    }

    /// Returns `true` for [`OrderingSpec::Natural`].
    pub const fn is_natural(&self) -> bool {
        matches!(self, Self::Natural(_))
    }
}

impl<T: NumberAware> Default for OrderingSpec<'_, T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<'a, T> From<Callback<'a, T>> for OrderingSpec<'a, T> {
    fn from(callback: Callback<'a, T>) -> Self {
        Self::Callback(callback)
    }
}

impl<T> fmt::Debug for OrderingSpec<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural(_) => formatter.write_str("OrderingSpec::Natural"),
            Self::Comparator(_) => formatter.write_str("OrderingSpec::Comparator(..)"),
            Self::Callback(callback) => write!(formatter, "OrderingSpec::Callback({callback:?})"),
        }
    }
}

/// Builds canonical comparators from an [`OrderingSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderingAdapter;

impl OrderingAdapter {
    /// Returns the comparator described by `spec`.
    ///
    /// A key extractor is called once per side per comparison; keys are
    /// compared with the number-aware order of [`Value`](super::Value).
    pub fn build<'a, T: 'a>(spec: OrderingSpec<'a, T>) -> Comparator<'a, T> {
        match spec {
            OrderingSpec::Natural(order) => {
                Box::new(move |left: &T, right: &T| order.compare(left, right))
            }
            OrderingSpec::Comparator(comparator)
            | OrderingSpec::Callback(Callback::BinaryComparator(comparator)) => comparator,
            OrderingSpec::Callback(Callback::KeyExtractor(key)) => {
                Box::new(move |left: &T, right: &T| key(left).number_aware_cmp(&key(right)))
            }
        }
    }

    /// Returns the equality predicate induced by `spec`.
    pub fn equality<'a, T: 'a>(spec: OrderingSpec<'a, T>) -> impl Fn(&T, &T) -> bool + 'a {
        let comparator = Self::build(spec);
        move |left: &T, right: &T| comparator(left, right).is_eq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::Value;
    use rstest::rstest;

    #[rstest]
    fn test_natural_is_number_aware() {
        let compare = OrderingAdapter::build(OrderingSpec::<Value>::natural());
        assert_eq!(compare(&Value::Int(2), &Value::Double(2.0)), Ordering::Equal);
        assert_eq!(compare(&Value::Long(3), &Value::Double(2.5)), Ordering::Greater);
    }

    #[rstest]
    fn test_key_extractor_compares_keys() {
        let compare = OrderingAdapter::build(OrderingSpec::by_key(|value: &i32| value % 3));
        assert_eq!(compare(&4, &7), Ordering::Equal);
        assert_eq!(compare(&5, &3), Ordering::Greater);
    }

    #[rstest]
    fn test_key_extractor_is_called_per_comparison() {
        let calls = std::cell::Cell::new(0);
        let compare = OrderingAdapter::build(OrderingSpec::by_key(|value: &i32| {
            calls.set(calls.get() + 1);
            *value
        }));
        compare(&1, &2);
        compare(&1, &2);
        assert_eq!(calls.get(), 4);
    }

    #[rstest]
    fn test_binary_callback_is_used_directly() {
        let spec: OrderingSpec<'_, i32> =
            Callback::comparator(|left: &i32, right: &i32| right.cmp(left)).into();
        let compare = OrderingAdapter::build(spec);
        assert_eq!(compare(&1, &2), Ordering::Greater);
    }

    #[rstest]
    fn test_equality() {
        let equal = OrderingAdapter::equality(OrderingSpec::by_key(|text: &&str| text.len()));
        assert!(equal(&"ab", &"cd"));
        assert!(!equal(&"ab", &"c"));
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[rstest]
    fn test_comparator_needs_no_natural_order() {
        let compare = OrderingAdapter::build(OrderingSpec::comparator(|left: &Point, right: &Point| {
            left.x.cmp(&right.x)
        }));
        assert_eq!(
            compare(&Point { x: 1, y: 9 }, &Point { x: 1, y: 0 }),
            Ordering::Equal
        );
        let equal = OrderingAdapter::equality(OrderingSpec::by_key(|point: &Point| point.y));
        assert!(!equal(&Point { x: 1, y: 9 }, &Point { x: 1, y: 0 }));
    }

    #[rstest]
    fn test_natural_order_reports_mutual_ordering() {
        let order = NaturalOrder::<Value>::new();
        assert!(order.is_mutually_ordered(&Value::Int(1), &Value::Double(0.5)));
        assert!(!order.is_mutually_ordered(&Value::Int(1), &Value::from("1")));
        assert_eq!(order.compare(&Value::Int(1), &Value::Long(1)), Ordering::Equal);
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", OrderingSpec::<i32>::by_key(|value: &i32| *value)),
            "OrderingSpec::Callback(Callback::KeyExtractor(..))"
        );
    }
}
