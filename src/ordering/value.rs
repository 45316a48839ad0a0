//! Dynamically typed values.
//!
//! [`Value`] is what a key-extractor callback produces and what splice
//! indices are expressed in. Its equality, ordering and hashing are all
//! number-aware: numeric variants are compared after promoting both sides
//! to a common representation.
//!
//! # Numeric promotion
//!
//! | Operands                        | Compared as |
//! |---------------------------------|-------------|
//! | either side is `Double`         | `f64`       |
//! | else either side is `Decimal`   | `Decimal`   |
//! | both `Int`/`Long`               | `i64`       |
//!
//! Values of unrelated families (for example `Text` against `Long`) are
//! never equal; they are ordered by family (`Null < Bool < numbers < text <
//! List`) and report [`NumberAware::is_mutually_ordered`] as `false`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::ordering::Value;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(Value::Int(1), Value::Double(1.0));
//! assert_eq!(Value::Long(10), Value::Decimal(Decimal::new(100, 1)));
//! assert_eq!(Value::Char('a'), Value::from("a"));
//! assert_ne!(Value::from("1"), Value::Int(1));
//! assert!(Value::Null < Value::Bool(false));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::NumberAware;

/// A dynamically typed value with number-aware equality.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The absent value. Sorts before everything else.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A 64-bit integer.
    Long(i64),
    /// A double precision float.
    Double(f64),
    /// An exact decimal.
    Decimal(Decimal),
    /// A single character. Equal to a one-character `Text`.
    Char(char),
    /// A string.
    Text(String),
    /// A list of values, compared lexicographically.
    List(Vec<Value>),
}

/// A numeric operand after promotion.
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Integral(i64),
    Exact(Decimal),
    Floating(f64),
}

impl Numeric {
    fn to_f64(self) -> f64 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Integral(value) => value as f64,
            Self::Exact(value) => value.to_f64().unwrap_or(f64::NAN),
            Self::Floating(value) => value,
        }
    }

    fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Integral(left), Self::Integral(right)) => left.cmp(&right),
            (Self::Floating(_), _) | (_, Self::Floating(_)) => {
                self.to_f64().number_aware_cmp(&other.to_f64())
            }
            (Self::Exact(left), Self::Exact(right)) => left.cmp(&right),
            (Self::Exact(left), Self::Integral(right)) => left.cmp(&Decimal::from(right)),
            (Self::Integral(left), Self::Exact(right)) => Decimal::from(left).cmp(&right),
        }
    }
}

impl Value {
    /// Returns the numeric view of this value, if it is a number.
    fn as_numeric(&self) -> Option<Numeric> {
        match self {
            Self::Int(value) => Some(Numeric::Integral(i64::from(*value))),
            Self::Long(value) => Some(Numeric::Integral(*value)),
            Self::Double(value) => Some(Numeric::Floating(*value)),
            Self::Decimal(value) => Some(Numeric::Exact(*value)),
            _ => None,
        }
    }

    const fn family(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Long(_) | Self::Double(_) | Self::Decimal(_) => 2,
            Self::Char(_) | Self::Text(_) => 3,
            Self::List(_) => 4,
        }
    }

    /// Returns the value as an `i64` if it is an `Int` or a `Long`.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value as i64),
            Self::Long(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Long(_) => "Long",
            Self::Double(_) => "Double",
            Self::Decimal(_) => "Decimal",
            Self::Char(_) => "Char",
            Self::Text(_) => "Text",
            Self::List(_) => "List",
        }
    }

    /// Interprets the value as the result of a two-argument comparator:
    /// the sign of a number, anything else compares equal.
    pub(crate) fn signum(&self) -> Ordering {
        self.as_numeric()
            .map_or(Ordering::Equal, |number| {
                number.compare(Numeric::Integral(0))
            })
    }
}

fn compare_char_with_text(character: char, text: &str) -> Ordering {
    let mut buffer = [0_u8; 4];
    let encoded: &str = character.encode_utf8(&mut buffer);
    encoded.cmp(text)
}

impl NumberAware for Value {
    fn number_aware_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Char(left), Self::Char(right)) => left.cmp(right),
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::Char(left), Self::Text(right)) => compare_char_with_text(*left, right),
            (Self::Text(left), Self::Char(right)) => {
                compare_char_with_text(*right, left).reverse()
            }
            (Self::List(left), Self::List(right)) => left.number_aware_cmp(right),
            _ => match (self.as_numeric(), other.as_numeric()) {
                (Some(left), Some(right)) => left.compare(right),
                _ => self.family().cmp(&other.family()),
            },
        }
    }

    fn is_mutually_ordered(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, _) | (_, Self::Null) => true,
            (Self::List(left), Self::List(right)) => left.is_mutually_ordered(right),
            _ => self.family() == other.family(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.number_aware_eq(other)
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number_aware_cmp(other)
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family().hash(state);
        match self {
            Self::Null => {}
            Self::Bool(value) => value.hash(state),
            Self::Int(_) | Self::Long(_) | Self::Double(_) | Self::Decimal(_) => {
                // Every pair that compares equal agrees on its f64 image.
                let image = self.as_numeric().map_or(0.0, Numeric::to_f64);
                let image = if image == 0.0 { 0.0 } else { image };
                let bits = if image.is_nan() {
                    f64::NAN.to_bits()
                } else {
                    image.to_bits()
                };
                bits.hash(state);
            }
            Self::Char(value) => {
                let mut buffer = [0_u8; 4];
                let encoded: &str = value.encode_utf8(&mut buffer);
                encoded.hash(state);
            }
            Self::Text(value) => value.as_str().hash(state),
            Self::List(values) => values.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Long(value) => write!(formatter, "{value}"),
            Self::Double(value) => write!(formatter, "{value}"),
            Self::Decimal(value) => write!(formatter, "{value}"),
            Self::Char(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value}"),
            Self::List(values) => {
                write!(formatter, "[")?;
                for (position, value) in values.iter().enumerate() {
                    if position > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

macro_rules! value_from {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$type> for Value {
                #[inline]
                fn from(value: $type) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

value_from!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    u8 => Int,
    u16 => Int,
    i64 => Long,
    u32 => Long,
    f32 => Double,
    f64 => Double,
    Decimal => Decimal,
    bool => Bool,
    char => Char,
    String => Text,
    &str => Text,
);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or(Self::Null, Self::Long)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        i64::try_from(value).map_or(Self::Double(value as f64), Self::Long)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
