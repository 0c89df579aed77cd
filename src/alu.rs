//! Blend ALU
//!
//! Lane-parallel arithmetic on eight 4-bit pixels packed into a word. The
//! arithmetic ops keep carries and borrows inside each lane by operating on
//! the low three bits of every lane separately from the top bit.

use crate::common::Word;

/// Top bit of every lane
const HIGH: Word = 0x8888_8888;

/// Low three bits of every lane
const LOW: Word = 0x7777_7777;

/// Blend operation selected by FLAGS bits 0-2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendOp {
    #[default]
    Replace = 0,
    And = 1,
    Or = 2,
    Xor = 3,
    Add = 4,
    Sub = 5,
    AddSat = 6,
    SubSat = 7,
}

impl BlendOp {
    /// Decode the blend field of a FLAGS value
    pub fn from_flags(flags: u16) -> Self {
        match flags & 0x7 {
            0 => BlendOp::Replace,
            1 => BlendOp::And,
            2 => BlendOp::Or,
            3 => BlendOp::Xor,
            4 => BlendOp::Add,
            5 => BlendOp::Sub,
            6 => BlendOp::AddSat,
            _ => BlendOp::SubSat,
        }
    }

    /// Whether the op reads the destination
    #[inline]
    pub fn reads_dest(self) -> bool {
        self != BlendOp::Replace
    }

    /// Combine a source word with the current destination word
    #[inline]
    pub fn apply(self, src: Word, dest: Word) -> Word {
        match self {
            BlendOp::Replace => src,
            BlendOp::And => src & dest,
            BlendOp::Or => src | dest,
            BlendOp::Xor => src ^ dest,
            BlendOp::Add => add(src, dest),
            BlendOp::Sub => sub(src, dest),
            BlendOp::AddSat => add_sat(src, dest),
            BlendOp::SubSat => sub_sat(src, dest),
        }
    }
}

/// Expand the top bit of each lane to the whole lane
#[inline]
fn lane_fill(high_bits: Word) -> Word {
    (high_bits >> 3) * 0xF
}

/// Per-lane `a + b` modulo 16
#[inline]
pub fn add(a: Word, b: Word) -> Word {
    ((a & LOW) + (b & LOW)) ^ ((a ^ b) & HIGH)
}

/// Per-lane `a - b` modulo 16
#[inline]
pub fn sub(a: Word, b: Word) -> Word {
    ((a | HIGH) - (b & LOW)) ^ ((a ^ !b) & HIGH)
}

/// Per-lane `min(a + b, 15)`
#[inline]
pub fn add_sat(a: Word, b: Word) -> Word {
    let sum = add(a, b);
    let carry = ((a & b) | ((a | b) & !sum)) & HIGH;
    sum | lane_fill(carry)
}

/// Per-lane `max(a - b, 0)`
#[inline]
pub fn sub_sat(a: Word, b: Word) -> Word {
    let diff = sub(a, b);
    let borrow = ((!a & b) | ((!a | b) & diff)) & HIGH;
    diff & !lane_fill(borrow)
}
