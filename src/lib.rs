// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `text-stack`
//!
//! A `no_std` (with `alloc`), bounded, dynamically-growing LIFO stack of short
//! text values, **with no `unsafe`**.
//!
//! The core type, [`TextStack`], owns a single contiguous buffer of text slots
//! and tracks a logical length `len ∈ 0..=MAXIMUM_CAPACITY`. Every public
//! operation first runs the checks in [`validate`]; only when they pass does
//! the stack touch its buffer or cursor.
//!
//! ## High-level semantics
//!
//! - Values are non-empty strings of at most [`MAX_VALUE_LENGTH`] characters
//!   (Unicode scalar values, not bytes).
//! - The buffer starts at [`STARTING_CAPACITY`] slots and doubles only when a
//!   push finds it exhausted. It never shrinks.
//! - [`MAXIMUM_CAPACITY`] is a logical ceiling on the element count. A push
//!   that would need to grow past it fails with [`Error::CapacityExceeded`].
//! - Every failure is reported as an [`Error`] and leaves the stack unchanged.
//!
//! ## Features
//!
//! - `tracing`
//!   - Emits a `debug` event on every buffer growth and a `warn` event when a
//!     push is rejected at the ceiling. Off by default; the core is silent
//!     without it.
//!
//! ## Example
//!
//! ```rust
//! use text_stack::{Error, InvalidValueReason, TextStack};
//!
//! let mut s = TextStack::new();
//! s.push("first").unwrap();
//! s.push("second").unwrap();
//! assert_eq!(s.peek(), Ok("second"));
//! assert_eq!(s.pop().as_deref(), Ok("second"));
//! assert_eq!(s.size(), 1);
//!
//! assert_eq!(
//!     s.push(None),
//!     Err(Error::InvalidValue(InvalidValueReason::Null))
//! );
//! ```
//!
//! The stack is single-owner. Share it across threads only behind a lock of
//! your choosing.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod stack;
pub mod validate;

// Public exports (crate API surface)
pub use error::{Error, InvalidValueReason};
pub use stack::TextStack;

/// Number of slots a freshly constructed stack allocates.
pub const STARTING_CAPACITY: usize = 16;

/// Logical ceiling on the number of values a stack may hold.
pub const MAXIMUM_CAPACITY: usize = 65_536;

/// Longest accepted value, in characters.
pub const MAX_VALUE_LENGTH: usize = 16;
