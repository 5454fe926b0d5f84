// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `TextStack`.
//!
//! These errors represent rejected inputs, underflow and the capacity ceiling.
//! They are `Copy` and implement `core::error::Error`.

// Crate imports
use crate::MAX_VALUE_LENGTH;

// Core imports
use core::fmt;

/// Errors returned by operations on [`TextStack`](crate::TextStack).
///
/// A failed operation never mutates the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The value handed to `push` was rejected. Retry with a corrected value.
    #[error("invalid value: {0}")]
    InvalidValue(InvalidValueReason),
    /// `pop` or `peek` was called on an empty stack.
    #[error("stack is empty")]
    Empty,
    /// The stack already holds [`MAXIMUM_CAPACITY`](crate::MAXIMUM_CAPACITY)
    /// values and cannot grow any further.
    #[error("stack has reached maximum capacity")]
    CapacityExceeded,
}

/// Why a value was rejected by [`validate::require_valid_value`](crate::validate::require_valid_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidValueReason {
    /// No value was supplied (`None`).
    Null,
    /// The value was the empty string.
    Empty,
    /// The value is longer than [`MAX_VALUE_LENGTH`] characters.
    TooLong {
        /// Length of the rejected value, in characters.
        len: usize,
    },
}

impl fmt::Display for InvalidValueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("value is null"),
            Self::Empty => f.write_str("value is empty"),
            Self::TooLong { len } => write!(
                f,
                "value is too long ({len} characters, at most {MAX_VALUE_LENGTH})"
            ),
        }
    }
}

impl From<InvalidValueReason> for Error {
    fn from(reason: InvalidValueReason) -> Self {
        Self::InvalidValue(reason)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, InvalidValueReason};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::Empty);
        assert!(s.contains("empty"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Empty.to_string(), "stack is empty");
        assert_eq!(
            Error::CapacityExceeded.to_string(),
            "stack has reached maximum capacity"
        );
        assert_eq!(
            Error::InvalidValue(InvalidValueReason::Null).to_string(),
            "invalid value: value is null"
        );
        assert_eq!(
            Error::InvalidValue(InvalidValueReason::Empty).to_string(),
            "invalid value: value is empty"
        );
        assert_eq!(
            Error::InvalidValue(InvalidValueReason::TooLong { len: 20 }).to_string(),
            "invalid value: value is too long (20 characters, at most 16)"
        );
    }

    #[test]
    fn test_reason_converts_into_error() {
        let e: Error = InvalidValueReason::Empty.into();
        assert_eq!(e, Error::InvalidValue(InvalidValueReason::Empty));
    }
}
