// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `TextStack` type and its inherent API.
//!
//! `TextStack` is a LIFO container of short owned strings. It stores values in
//! a single boxed slice of optional slots and tracks a logical length that also
//! serves as the insertion cursor. Mutating paths live in the submodules, one
//! operation per file.

mod grow;
mod pop;
mod push;

// Crate imports
use crate::{MAXIMUM_CAPACITY, MAX_VALUE_LENGTH, STARTING_CAPACITY};

// Alloc imports
use alloc::{boxed::Box, string::String};

// Core imports
use core::{fmt, iter};

/// A bounded, growable, last-in-first-out stack of short text values.
///
/// `TextStack` owns a buffer of `capacity` slots and a logical length
/// `len ∈ 0..=capacity`. Conceptually:
///
/// - slots `[0, len)` hold the pushed values, bottom first;
/// - slots `[len, capacity)` are `None` (a popped value is moved out, never
///   left behind);
/// - `capacity` starts at [`STARTING_CAPACITY`] and only ever doubles, up to
///   [`MAXIMUM_CAPACITY`].
///
/// # Capacity model
///
/// Two limits are tracked separately:
///
/// - the **buffer capacity** ([`capacity`](Self::capacity)), which grows on
///   demand when a push finds the buffer exhausted
///   ([`is_at_capacity`](Self::is_at_capacity));
/// - the **logical ceiling** [`MAXIMUM_CAPACITY`], checked by
///   [`is_full`](Self::is_full). Once `len` reaches it, further pushes fail
///   with [`Error::CapacityExceeded`](crate::Error::CapacityExceeded).
///
/// Growth happens only when the next push would otherwise overflow, so a
/// sequence of `n` pushes costs `O(n)` in total.
///
/// # Errors and atomicity
///
/// Every fallible method runs its checks from [`crate::validate`] first. On
/// failure it returns an [`Error`](crate::Error) and leaves the stack exactly
/// as it was.
///
/// # Examples
///
/// ```rust
/// use text_stack::{Error, TextStack};
///
/// let mut s = TextStack::new();
/// assert!(s.is_empty());
/// assert_eq!(s.pop(), Err(Error::Empty));
///
/// for i in 0..17 {
///     s.push(format!("Test {i}").as_str()).unwrap();
/// }
/// assert_eq!(s.capacity(), 32);
/// assert_eq!(s.peek(), Ok("Test 16"));
/// ```
///
/// # Threading
///
/// The stack is meant for a single owner. Wrap it in a mutex if several
/// threads need it.
pub struct TextStack {
    pub(crate) buf: Box<[Option<String>]>,
    pub(crate) len: usize,
}

impl TextStack {
    /// Initial buffer capacity of every new stack.
    pub const STARTING_CAPACITY: usize = STARTING_CAPACITY;
    /// Logical ceiling on the number of values.
    pub const MAXIMUM_CAPACITY: usize = MAXIMUM_CAPACITY;
    /// Longest accepted value, in characters.
    pub const MAX_VALUE_LENGTH: usize = MAX_VALUE_LENGTH;

    /// Constructs an empty stack with [`STARTING_CAPACITY`] cleared slots.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: empty_slots(STARTING_CAPACITY),
            len: 0,
        }
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots in the current buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once `len` reaches [`MAXIMUM_CAPACITY`].
    ///
    /// This is the logical ceiling and says nothing about the current buffer.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len >= MAXIMUM_CAPACITY
    }

    /// Returns `true` if every slot of the current buffer is occupied, i.e.
    /// the next push has to grow the buffer first.
    #[inline]
    pub fn is_at_capacity(&self) -> bool {
        self.len == self.buf.len()
    }

    // Live values, bottom first.
    fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.buf[..self.len].iter().flatten().map(String::as_str)
    }
}

/// Allocates `n` cleared slots.
pub(crate) fn empty_slots(n: usize) -> Box<[Option<String>]> {
    iter::repeat_with(|| None).take(n).collect()
}

impl Default for TextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TextStack {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl fmt::Debug for TextStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Values<'a>(&'a TextStack);
        impl fmt::Debug for Values<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.values()).finish()
            }
        }

        f.debug_struct("TextStack")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("values", &Values(self))
            .finish()
    }
}

// Equality looks at the live values only; two stacks with different buffer
// capacities but the same contents are equal.
impl PartialEq for TextStack {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}
impl Eq for TextStack {}
