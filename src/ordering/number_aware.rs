//! Number-aware natural ordering.
//!
//! [`NumberAware`] is the "natural order" capability every ordering path in
//! this crate falls back to when the caller does not supply a comparator.
//! It differs from [`Ord`] in two ways:
//!
//! - it is available for floating point numbers (`-0.0` and `0.0` compare
//!   equal, NaN is placed by the IEEE total order so the relation stays total)
//! - numeric values held in a [`Value`](super::Value) compare by numeric value
//!   regardless of representation, so `Int(2)`, `Long(2)`, `Double(2.0)` and
//!   `Decimal(2)` are all equal
//!
//! [`NumberAwareEquality`] exposes the relation as the `equal`/`compare`
//! pair used by the dedup and set algebra engines.
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::ordering::{NumberAwareEquality, Value};
//! use std::cmp::Ordering;
//!
//! assert!(NumberAwareEquality::equal(&Value::Int(2), &Value::Double(2.0)));
//! assert_eq!(
//!     NumberAwareEquality::compare(&Value::Long(3), &Value::Double(2.5)),
//!     Ordering::Greater
//! );
//! assert!(NumberAwareEquality::equal(&-0.0_f64, &0.0_f64));
//! ```

use std::cmp::Ordering;

use rust_decimal::Decimal;

/// A total ordering that unifies numeric values across representations.
///
/// Implement this for your own types to make them usable with
/// [`OrderingSpec::Natural`](super::OrderingSpec::Natural). Types that
/// already implement [`Ord`] can use [`impl_number_aware_by_ord!`](crate::impl_number_aware_by_ord).
pub trait NumberAware {
    /// Compares two values under the number-aware natural order.
    fn number_aware_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` if both values are equal under the number-aware order.
    fn number_aware_eq(&self, other: &Self) -> bool {
        self.number_aware_cmp(other).is_eq()
    }

    /// Returns `true` if the two values belong to families that order
    /// meaningfully against each other.
    ///
    /// Only dynamically typed values can answer `false`; the set algebra
    /// engine uses this to decide whether a sorted membership index is
    /// trustworthy.
    fn is_mutually_ordered(&self, other: &Self) -> bool {
        let _ = other;
        true
    }
}

/// The default equality/ordering relation of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberAwareEquality;

impl NumberAwareEquality {
    /// Returns `true` if `left` and `right` are number-aware equal.
    #[inline]
    pub fn equal<T: NumberAware + ?Sized>(left: &T, right: &T) -> bool {
        left.number_aware_eq(right)
    }

    /// Compares `left` with `right`.
    #[inline]
    pub fn compare<T: NumberAware + ?Sized>(left: &T, right: &T) -> Ordering {
        left.number_aware_cmp(right)
    }
}

/// Implements [`NumberAware`] for types with a total [`Ord`].
///
/// # Examples
///
/// ```rust
/// use lambars_seq::impl_number_aware_by_ord;
/// use lambars_seq::ordering::NumberAwareEquality;
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Priority(u8);
///
/// impl_number_aware_by_ord!(Priority);
///
/// assert!(NumberAwareEquality::equal(&Priority(1), &Priority(1)));
/// ```
#[macro_export]
macro_rules! impl_number_aware_by_ord {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::ordering::NumberAware for $type {
                #[inline]
                fn number_aware_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                    ::std::cmp::Ord::cmp(self, other)
                }
            }
        )*
    };
}

crate::impl_number_aware_by_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String, (),
    Decimal,
);

macro_rules! number_aware_float {
    ($($type:ty),*) => {
        $(
            impl NumberAware for $type {
                #[inline]
                fn number_aware_cmp(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other)
                        .unwrap_or_else(|| self.total_cmp(other))
                }
            }
        )*
    };
}

number_aware_float!(f32, f64);

impl<T: NumberAware + ?Sized> NumberAware for &T {
    #[inline]
    fn number_aware_cmp(&self, other: &Self) -> Ordering {
        (**self).number_aware_cmp(*other)
    }

    #[inline]
    fn is_mutually_ordered(&self, other: &Self) -> bool {
        (**self).is_mutually_ordered(*other)
    }
}

impl<T: NumberAware + ?Sized> NumberAware for Box<T> {
    #[inline]
    fn number_aware_cmp(&self, other: &Self) -> Ordering {
        (**self).number_aware_cmp(&**other)
    }

    #[inline]
    fn is_mutually_ordered(&self, other: &Self) -> bool {
        (**self).is_mutually_ordered(&**other)
    }
}

impl<T: NumberAware> NumberAware for Option<T> {
    fn number_aware_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => left.number_aware_cmp(right),
        }
    }

    fn is_mutually_ordered(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.is_mutually_ordered(right),
            _ => true,
        }
    }
}

impl<T: NumberAware> NumberAware for [T] {
    fn number_aware_cmp(&self, other: &Self) -> Ordering {
        self.iter()
            .zip(other)
            .map(|(left, right)| left.number_aware_cmp(right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }

    fn is_mutually_ordered(&self, other: &Self) -> bool {
        self.iter()
            .zip(other)
            .all(|(left, right)| left.is_mutually_ordered(right))
    }
}

impl<T: NumberAware> NumberAware for Vec<T> {
    #[inline]
    fn number_aware_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().number_aware_cmp(other.as_slice())
    }

    #[inline]
    fn is_mutually_ordered(&self, other: &Self) -> bool {
        self.as_slice().is_mutually_ordered(other.as_slice())
    }
}

impl<T: NumberAware, const N: usize> NumberAware for [T; N] {
    #[inline]
    fn number_aware_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().number_aware_cmp(other.as_slice())
    }

    #[inline]
    fn is_mutually_ordered(&self, other: &Self) -> bool {
        self.as_slice().is_mutually_ordered(other.as_slice())
    }
}

macro_rules! number_aware_tuple {
    ($(($($name:ident : $index:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: NumberAware),+> NumberAware for ($($name,)+) {
                fn number_aware_cmp(&self, other: &Self) -> Ordering {
                    Ordering::Equal
                        $(.then_with(|| self.$index.number_aware_cmp(&other.$index)))+
                }

                fn is_mutually_ordered(&self, other: &Self) -> bool {
                    true $(&& self.$index.is_mutually_ordered(&other.$index))+
                }
            }
        )+
    };
}

number_aware_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);
