//! Pixel Unpacking
//!
//! Expansion tables used to widen packed 1bpp and 2bpp source images into
//! the 4-bit lanes the pipeline works on. Each source pixel is replicated
//! into every bit of its wider lane, so a set 1bpp pixel becomes 0b11 at
//! 2bpp and 0b1111 at 4bpp.

use crate::common::{Byte, Half, Word};

/// Source expansion selected by FLAGS bits 8-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnpackMode {
    /// Raw 32-bit words
    #[default]
    Off,
    /// One byte of 1bpp to 2bpp, repeated in both half-words
    Expand8To16,
    /// One byte of 1bpp to 4bpp
    Expand8To32,
    /// One half-word of 2bpp to 4bpp
    Expand16To32,
}

impl UnpackMode {
    /// Decode the unpack field of a FLAGS value
    pub fn from_flags(flags: Half) -> Self {
        match (flags >> 8) & 0x3 {
            0 => UnpackMode::Off,
            1 => UnpackMode::Expand8To16,
            2 => UnpackMode::Expand8To32,
            _ => UnpackMode::Expand16To32,
        }
    }

    /// Source bytes consumed per 32-bit output word
    pub fn stride(self) -> usize {
        match self {
            UnpackMode::Off => 4,
            UnpackMode::Expand16To32 => 2,
            UnpackMode::Expand8To32 | UnpackMode::Expand8To16 => 1,
        }
    }
}

/// 1bpp -> 2bpp: bit i of the index fills bits 2i and 2i+1
pub static SPREAD_1_TO_2: [Half; 256] = build_spread_1_to_2();

/// 2bpp -> 4bpp: pixel i of the index fills bits 4i..4i+3
pub static SPREAD_2_TO_4: [Half; 256] = build_spread_2_to_4();

/// 1bpp -> 4bpp: bit i of the index fills bits 4i..4i+3
pub static SPREAD_1_TO_4: [Word; 256] = build_spread_1_to_4();

const fn build_spread_1_to_2() -> [Half; 256] {
    let mut table = [0; 256];
    let mut packed = 0;
    while packed < 256 {
        let mut i = 0;
        while i < 8 {
            let b = ((packed >> i) & 0x1) as Half;
            table[packed] |= (b << (i * 2)) | (b << (i * 2 + 1));
            i += 1;
        }
        packed += 1;
    }
    table
}

const fn build_spread_2_to_4() -> [Half; 256] {
    let mut table = [0; 256];
    let mut packed = 0;
    while packed < 256 {
        let mut i = 0;
        while i < 4 {
            let b = ((packed >> (i * 2)) & 0x3) as Half;
            table[packed] |= (b << (i * 4)) | (b << (i * 4 + 2));
            i += 1;
        }
        packed += 1;
    }
    table
}

const fn build_spread_1_to_4() -> [Word; 256] {
    let half = build_spread_1_to_2();
    let quad = build_spread_2_to_4();
    let mut table = [0; 256];
    let mut packed = 0;
    while packed < 256 {
        let h = half[packed];
        table[packed] = quad[(h & 0xFF) as usize] as Word | ((quad[(h >> 8) as usize] as Word) << 16);
        packed += 1;
    }
    table
}

/// One byte of 1bpp pixels as 2bpp, duplicated into both half-words
#[inline]
pub fn unpack_8_16(data: Byte) -> Word {
    let half = SPREAD_1_TO_2[data as usize] as Word;
    half | (half << 16)
}

/// One byte of 1bpp pixels as eight 4-bit lanes
#[inline]
pub fn unpack_8_32(data: Byte) -> Word {
    SPREAD_1_TO_4[data as usize]
}

/// One half-word of 2bpp pixels as eight 4-bit lanes
#[inline]
pub fn unpack_16_32(data: Half) -> Word {
    SPREAD_2_TO_4[(data & 0xFF) as usize] as Word
        | ((SPREAD_2_TO_4[(data >> 8) as usize] as Word) << 16)
}
