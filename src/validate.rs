// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Precondition checks for [`TextStack`](crate::TextStack) operations.
//!
//! Each public stack operation calls the matching check before it touches the
//! buffer or the cursor, so a failed check always leaves the stack unchanged.
//! The checks are pure: they inspect their argument and return.

// Crate imports
use crate::{
    error::{Error, InvalidValueReason},
    stack::TextStack,
    MAX_VALUE_LENGTH,
};

/// Fails with [`Error::Empty`] if `stack` holds no values.
#[inline]
pub fn require_non_empty(stack: &TextStack) -> Result<(), Error> {
    if stack.is_empty() {
        return Err(Error::Empty);
    }
    Ok(())
}

/// Fails with [`Error::CapacityExceeded`] if `stack` has reached
/// [`MAXIMUM_CAPACITY`](crate::MAXIMUM_CAPACITY).
///
/// This is checked against the logical ceiling, not the current buffer size.
#[inline]
pub fn require_not_full(stack: &TextStack) -> Result<(), Error> {
    if stack.is_full() {
        return Err(Error::CapacityExceeded);
    }
    Ok(())
}

/// Accepts `value` if it is present, non-empty and at most
/// [`MAX_VALUE_LENGTH`] characters long.
///
/// Length is counted in `char`s, so multi-byte characters count once.
pub fn require_valid_value(value: Option<&str>) -> Result<&str, Error> {
    let value = value.ok_or(InvalidValueReason::Null)?;
    if value.is_empty() {
        return Err(InvalidValueReason::Empty.into());
    }
    // Cheap reject before counting: a string can't have more chars than bytes.
    if value.len() > MAX_VALUE_LENGTH {
        let len = value.chars().count();
        if len > MAX_VALUE_LENGTH {
            return Err(InvalidValueReason::TooLong { len }.into());
        }
    }
    Ok(value)
}
