//! Bit FIFO
//!
//! A 64-bit shift-register queue. Bits are pushed at the top and popped from
//! the bottom, so they come out in the order they went in. Used for the
//! command stream and for the pipeline's source queue.

use crate::common::{low_bits, QWord, Word};

/// Capacity of the queue in bits
pub const FIFO_CAPACITY: u32 = 64;

/// 64-bit bit-level FIFO
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitFifo {
    bits: QWord,
    size: u32,
}

impl BitFifo {
    /// Create an empty FIFO
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffered bits
    #[inline]
    pub fn len(&self) -> u32 {
        self.size
    }

    /// Check if no bits are buffered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Append the low `n` bits of `value` (`n` in 0..=32)
    #[inline]
    pub fn push(&mut self, value: Word, n: u32) {
        debug_assert!(n <= 32, "push of {} bits", n);
        debug_assert!(self.size + n <= FIFO_CAPACITY, "bit fifo overflow");
        if n == 0 || self.size >= FIFO_CAPACITY {
            return;
        }
        self.bits |= (low_bits(value, n) as QWord) << self.size;
        self.size += n;
    }

    /// Remove the oldest `n` bits (`n` in 0..=32)
    #[inline]
    pub fn pop(&mut self, n: u32) -> Word {
        debug_assert!(n <= 32, "pop of {} bits", n);
        debug_assert!(n <= self.size, "bit fifo underflow");
        if n == 0 {
            return 0;
        }
        let value = low_bits(self.bits as Word, n);
        self.bits >>= n;
        self.size = self.size.saturating_sub(n);
        value
    }

    /// Discard all buffered bits
    pub fn clear(&mut self) {
        self.bits = 0;
        self.size = 0;
    }
}
