//! Ordering callbacks with a declared arity.
//!
//! A [`Callback`] is either a one-argument key extractor or a two-argument
//! comparator. The distinction is fixed when the callback is built, so the
//! ordering adapter never has to inspect a closure at comparison time.

use std::cmp::Ordering;
use std::fmt;

use super::Value;

/// A boxed key extractor.
pub type KeyFn<'a, T> = Box<dyn Fn(&T) -> Value + 'a>;

/// A boxed two-argument comparator.
pub type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// A closure used as an ordering rule, tagged with its arity.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::ordering::Callback;
///
/// let by_length: Callback<'_, String> = Callback::key(|text: &String| text.len());
/// assert_eq!(by_length.declared_arity(), 1);
///
/// let descending: Callback<'_, i32> = Callback::comparator(|left: &i32, right: &i32| right.cmp(left));
/// assert_eq!(descending.declared_arity(), 2);
/// ```
pub enum Callback<'a, T> {
    /// Arity 1: the result is used as a sort key.
    KeyExtractor(KeyFn<'a, T>),
    /// Arity 2: used directly as a comparator.
    BinaryComparator(Comparator<'a, T>),
}

impl<'a, T> Callback<'a, T> {
    /// Builds a key-extractor callback.
    pub fn key<K, F>(function: F) -> Self
    where
        K: Into<Value>,
        F: Fn(&T) -> K + 'a,
    {
        Self::KeyExtractor(Box::new(move |element: &T| function(element).into()))
    }

    /// Builds a comparator callback.
    pub fn comparator<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self::BinaryComparator(Box::new(function))
    }

    /// Builds a callback from a dynamically typed function and its declared
    /// parameter count.
    ///
    /// The function receives its arguments as a slice. A declared arity of
    /// exactly 2 makes it a comparator whose result is read by sign (non
    /// numeric results compare equal); any other arity makes it a key
    /// extractor called with one argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::ordering::{Callback, Value};
    ///
    /// let callback: Callback<'_, i64> = Callback::from_arity(2, |arguments: &[&i64]| {
    ///     Value::Long(*arguments[1] - *arguments[0])
    /// });
    /// assert_eq!(callback.declared_arity(), 2);
    ///
    /// let callback: Callback<'_, i64> = Callback::from_arity(0, |arguments: &[&i64]| {
    ///     Value::Long(*arguments[0] % 3)
    /// });
    /// assert_eq!(callback.declared_arity(), 1);
    /// ```
    pub fn from_arity<F>(arity: usize, function: F) -> Self
    where
        F: Fn(&[&T]) -> Value + 'a,
    {
        if arity == 2 {
            Self::BinaryComparator(Box::new(move |left: &T, right: &T| {
                function(&[left, right]).signum()
            }))
        } else {
            Self::KeyExtractor(Box::new(move |element: &T| function(&[element])))
        }
    }

    /// Returns the number of parameters the callback accepts.
    pub const fn declared_arity(&self) -> usize {
        match self {
            Self::KeyExtractor(_) => 1,
            Self::BinaryComparator(_) => 2,
        }
    }
}

impl<T> fmt::Debug for Callback<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyExtractor(_) => formatter.write_str("Callback::KeyExtractor(..)"),
            Self::BinaryComparator(_) => formatter.write_str("Callback::BinaryComparator(..)"),
        }
    }
}
