//! Error types for sequence operations.
//!
//! Every failure in this crate is raised at the point of the offending call
//! and propagated to the caller unchanged. Two kinds are distinguished so
//! that callers can tell "the input was empty" apart from "the arguments
//! were wrong":
//!
//! - [`EmptyStructureError`]: `first`, `last`, `head`, `tail`, `init`,
//!   `pop`, `remove_last` or a seedless `inject` was applied to an empty
//!   sequence.
//! - [`InvalidArgumentError`]: a zero `step` for `collate`, mismatched
//!   splice index/value counts, or a non-integer splice index.
//!
//! Index arithmetic that lands outside a list is reported separately as
//! [`SequenceError::IndexOutOfBounds`].
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::collection::first;
//! use lambars_seq::error::SequenceError;
//!
//! let empty: Vec<i32> = Vec::new();
//! let error = first(&empty).unwrap_err();
//! assert!(error.is_empty_structure());
//! assert_eq!(format!("{error}"), "Cannot access first() for an empty List");
//! ```

use thiserror::Error;

/// Raised when an operation needs at least one element but the sequence is empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("Cannot access {operation}() for an empty {structure}")]
pub struct EmptyStructureError {
    /// The name of the operation that was attempted.
    pub operation: &'static str,
    /// A human readable name for the kind of sequence (`"List"`, `"Iterator"`, ...).
    pub structure: &'static str,
}

/// Raised when an argument can never produce a valid result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{operation}(): {reason}")]
pub struct InvalidArgumentError {
    /// The name of the operation that rejected the argument.
    pub operation: &'static str,
    /// Why the argument was rejected.
    pub reason: String,
}

/// The error type shared by all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SequenceError {
    /// The sequence had no elements.
    #[error(transparent)]
    EmptyStructure(#[from] EmptyStructureError),
    /// An argument was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
    /// An index (after negative-index normalization) fell outside the list.
    #[error("{operation}(): index {index} is out of range for a List of size {length}")]
    IndexOutOfBounds {
        /// The name of the operation.
        operation: &'static str,
        /// The index as the caller supplied it.
        index: i64,
        /// The length of the list at the time of the call.
        length: usize,
    },
}

impl SequenceError {
    pub(crate) const fn empty(operation: &'static str, structure: &'static str) -> Self {
        Self::EmptyStructure(EmptyStructureError {
            operation,
            structure,
        })
    }

    pub(crate) fn invalid(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument(InvalidArgumentError {
            operation,
            reason: reason.into(),
        })
    }

    /// Returns `true` if this error signals an empty input.
    #[must_use]
    pub const fn is_empty_structure(&self) -> bool {
        matches!(self, Self::EmptyStructure(_))
    }

    /// Returns `true` if this error signals a rejected argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result alias used throughout the crate.
pub type SequenceResult<T> = Result<T, SequenceError>;

static_assertions::assert_impl_all!(SequenceError: std::error::Error, Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_structure_display() {
        let error = SequenceError::empty("init", "Iterator");
        assert_eq!(format!("{error}"), "Cannot access init() for an empty Iterator");
        assert!(error.is_empty_structure());
        assert!(!error.is_invalid_argument());
    }

    #[rstest]
    fn test_invalid_argument_display() {
        let error = SequenceError::invalid("collate", "step cannot be zero");
        assert_eq!(format!("{error}"), "collate(): step cannot be zero");
        assert!(error.is_invalid_argument());
    }

    #[rstest]
    fn test_index_out_of_bounds_display() {
        let error = SequenceError::IndexOutOfBounds {
            operation: "put_at",
            index: -7,
            length: 3,
        };
        assert_eq!(
            format!("{error}"),
            "put_at(): index -7 is out of range for a List of size 3"
        );
    }

    #[rstest]
    fn test_from_inner_errors() {
        let inner = EmptyStructureError {
            operation: "pop",
            structure: "List",
        };
        let error: SequenceError = inner.clone().into();
        assert_eq!(error, SequenceError::EmptyStructure(inner));
    }
}
