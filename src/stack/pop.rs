// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::TextStack, validate};

// Alloc imports
use alloc::string::String;

impl TextStack {
    /// Removes and returns the top value.
    ///
    /// The vacated slot is cleared. Returns [`Error::Empty`] if there is
    /// nothing to pop.
    pub fn pop(&mut self) -> Result<String, Error> {
        validate::require_non_empty(self)?;
        let top = self.len - 1;
        let value = self.buf[top].take().ok_or(Error::Empty)?;
        self.len = top;
        Ok(value)
    }

    /// Returns the top value without removing it.
    ///
    /// Returns [`Error::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<&str, Error> {
        validate::require_non_empty(self)?;
        self.buf[self.len - 1].as_deref().ok_or(Error::Empty)
    }
}
