//! Common types and utilities for the blitter core
//!
//! This module defines type aliases matching the coprocessor's data widths
//! and the bit manipulation helpers shared by the pipeline stages.

/// 8-bit unsigned integer (opcode / byte lane)
pub type Byte = u8;

/// 16-bit unsigned integer (register width)
pub type Half = u16;

/// 32-bit unsigned integer (memory word, eight 4-bit pixels)
pub type Word = u32;

/// 64-bit unsigned integer (bit FIFO storage)
pub type QWord = u64;

/// Number of bits in one pixel lane
pub const LANE_BITS: i32 = 4;

/// Number of bits in one memory word
pub const WORD_BITS: i32 = 32;

/// Keep only the low bits of a word
///
/// # Arguments
/// * `value` - The word to truncate
/// * `n` - Number of bits to keep (0-32)
///
/// # Returns
/// `value` with every bit at position `n` or above cleared
#[inline]
pub fn low_bits(value: Word, n: u32) -> Word {
    if n >= 32 {
        value
    } else {
        value & ((1 << n) - 1)
    }
}

/// Build a mask covering a run of bit positions in a word
///
/// # Arguments
/// * `begin` - First bit position (inclusive), clamped to 0-32
/// * `end` - Last bit position (exclusive), clamped to 0-32
///
/// # Returns
/// A word with bits `[begin, end)` set, or zero when the range is empty
#[inline]
pub fn span_mask(begin: i32, end: i32) -> Word {
    let begin = begin.clamp(0, WORD_BITS);
    let end = end.clamp(0, WORD_BITS);
    if end <= begin {
        return 0;
    }
    (((1u64 << (end - begin)) - 1) << begin) as Word
}

/// Replicate a 4-bit value into all eight lanes of a word
#[inline]
pub fn splat_nibble(value: Half) -> Word {
    let v = (value & 0xF) as Word;
    v * 0x1111_1111
}
