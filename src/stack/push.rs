// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::TextStack, validate};

// Alloc imports
use alloc::string::ToString;

impl TextStack {
    /// Pushes a copy of `value` on top of the stack.
    ///
    /// Accepts a `&str` or `None`. The buffer is grown first if it is
    /// exhausted.
    ///
    /// - Returns [`Error::InvalidValue`] if `value` is `None`, empty, or longer
    ///   than [`MAX_VALUE_LENGTH`](crate::MAX_VALUE_LENGTH) characters.
    /// - Returns [`Error::CapacityExceeded`] if the stack already holds
    ///   [`MAXIMUM_CAPACITY`](crate::MAXIMUM_CAPACITY) values.
    ///
    /// The stack is unchanged on error.
    pub fn push<'a, V>(&mut self, value: V) -> Result<(), Error>
    where
        V: Into<Option<&'a str>>,
    {
        let value = validate::require_valid_value(value.into())?;
        if self.is_at_capacity() {
            self.grow()?;
        }

        self.buf[self.len] = Some(value.to_string());

        self.len += 1;
        Ok(())
    }
}
