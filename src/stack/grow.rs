// This file is part of text-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    stack::{empty_slots, TextStack},
    validate, MAXIMUM_CAPACITY,
};

impl TextStack {
    /// Doubles the buffer, moving every live value to the same position.
    ///
    /// Returns [`Error::CapacityExceeded`] without touching the buffer once the
    /// logical ceiling is reached.
    pub(crate) fn grow(&mut self) -> Result<(), Error> {
        if let Err(e) = validate::require_not_full(self) {
            #[cfg(feature = "tracing")]
            tracing::warn!(len = self.len, "push rejected: stack at maximum capacity");
            return Err(e);
        }

        let from = self.capacity();
        let to = (from * 2).min(MAXIMUM_CAPACITY);
        let mut next = empty_slots(to);
        for (dst, src) in next.iter_mut().zip(self.buf[..self.len].iter_mut()) {
            *dst = src.take();
        }
        // The old buffer is dropped only after `next` is fully populated.
        self.buf = next;

        #[cfg(feature = "tracing")]
        tracing::debug!(from, to, "stack buffer grown");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, TextStack, MAXIMUM_CAPACITY, STARTING_CAPACITY};

    #[test]
    fn test_growth_is_lazy() {
        let mut s = TextStack::new();
        for i in 0..STARTING_CAPACITY {
            s.push(format!("Test {i}").as_str()).unwrap();
        }
        // Exhausted, but no growth until the next push.
        assert!(s.is_at_capacity());
        assert_eq!(s.capacity(), STARTING_CAPACITY);

        s.push("Test 16").unwrap();
        assert_eq!(s.capacity(), STARTING_CAPACITY * 2);
        assert_eq!(s.size(), 17);
    }

    #[test]
    fn test_grow_preserves_positions() {
        let mut s = TextStack::new();
        for i in 0..STARTING_CAPACITY {
            s.push(format!("{i}").as_str()).unwrap();
        }
        s.grow().unwrap();
        assert_eq!(s.capacity(), 32);
        assert_eq!(s.size(), STARTING_CAPACITY);
        for i in 0..STARTING_CAPACITY {
            assert_eq!(s.buf[i].as_deref(), Some(format!("{i}").as_str()));
        }
        assert!(s.buf[STARTING_CAPACITY..].iter().all(Option::is_none));
    }

    #[test]
    fn test_capacity_only_doubles() {
        let mut s = TextStack::new();
        let mut seen = vec![s.capacity()];
        while !s.is_full() {
            s.push("v").unwrap();
            if *seen.last().unwrap() != s.capacity() {
                seen.push(s.capacity());
            }
        }
        assert_eq!(
            seen,
            [16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536]
        );
    }

    #[test]
    fn test_grow_refused_at_ceiling() {
        let mut s = TextStack::new();
        while !s.is_full() {
            s.push("v").unwrap();
        }
        assert_eq!(s.grow(), Err(Error::CapacityExceeded));
        assert_eq!(s.capacity(), MAXIMUM_CAPACITY);
        assert_eq!(s.size(), MAXIMUM_CAPACITY);
    }
}
