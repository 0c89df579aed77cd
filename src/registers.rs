//! Register File
//!
//! This module defines the blitter's sixteen 16-bit registers and the
//! host-readable shadow window that mirrors them.
//!
//! Register roles:
//! - R0 DEST_ADDR: destination address
//! - R1 SRC_ADDR: source address
//! - R2 STACK_ADDR: top of the operand stack (blitter bank word address)
//! - R4 COUNT: width/height pair or linear length
//! - R5 FLAGS: blend op, unpack mode, masked
//! - R6 COLORS: background (bits 0-3) and foreground (bits 4-7) nibbles
//! - R7 CLIP: left (low byte) and right (high byte) clip columns
//! - R8 PITCH: signed row stride in pixels
//! - R9 GUARD: write-protected 2KB display bank pages
//! - R15 SYNC: ignored by the blitter, used by the host for synchronisation

use crate::common::{Half, Word};

/// Number of addressable registers
pub const NUM_REGS: usize = 16;

pub const REG_DEST_ADDR: usize = 0;
pub const REG_SRC_ADDR: usize = 1;
pub const REG_STACK_ADDR: usize = 2;
pub const REG_COUNT: usize = 4;
pub const REG_FLAGS: usize = 5;
pub const REG_COLORS: usize = 6;
pub const REG_CLIP: usize = 7;
pub const REG_PITCH: usize = 8;
pub const REG_GUARD: usize = 9;
pub const REG_SYNC: usize = 15;

/// Spread a register value onto the host bus byte lanes
///
/// The host reads 8-bit registers on a 16-bit stride.
///
/// # Arguments
/// * `value` - The register value
///
/// # Returns
/// The low byte in bits 0-7 and the high byte in bits 16-23
#[inline]
pub fn swizzle(value: Half) -> Word {
    (value as Word & 0xFF) | ((value as Word & 0xFF00) << 8)
}

/// Inverse of [`swizzle`]
#[inline]
pub fn unswizzle(value: Word) -> Half {
    ((value & 0xFF) | ((value >> 8) & 0xFF00)) as Half
}

/// Blitter register file
#[derive(Debug, Clone, Default)]
pub struct RegisterFile {
    regs: [Half; NUM_REGS],
    /// Read-only copy for the host, in bus byte-lane layout
    shadow: [Word; NUM_REGS],
}

impl RegisterFile {
    /// Create a register file with every register cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a register; the index wraps modulo 16
    #[inline]
    pub fn get(&self, idx: usize) -> Half {
        self.regs[idx & (NUM_REGS - 1)]
    }

    /// Write a register and mirror it into the shadow window
    #[inline]
    pub fn set(&mut self, idx: usize, value: Half) {
        let idx = idx & (NUM_REGS - 1);
        self.regs[idx] = value;
        self.shadow[idx] = swizzle(value);
    }

    /// Host view of a register, as it appears on the bus
    #[inline]
    pub fn shadow(&self, idx: usize) -> Word {
        self.shadow[idx & (NUM_REGS - 1)]
    }

    /// Host view of a register, decoded back to 16 bits
    pub fn shadow_value(&self, idx: usize) -> Half {
        unswizzle(self.shadow(idx))
    }

    /// Copy one register into another
    pub fn copy(&mut self, dest: usize, src: usize) {
        self.set(dest, self.get(src));
    }

    // ========== Packed field accessors ==========

    /// Low byte of COUNT (planar width, or SWAP line index)
    #[inline]
    pub fn count_low(&self) -> Half {
        self.get(REG_COUNT) & 0xFF
    }

    /// High byte of COUNT (planar height)
    #[inline]
    pub fn count_high(&self) -> Half {
        self.get(REG_COUNT) >> 8
    }

    /// Signed row stride
    #[inline]
    pub fn pitch(&self) -> i32 {
        self.get(REG_PITCH) as i16 as i32
    }

    /// Background color nibble
    #[inline]
    pub fn background(&self) -> Half {
        self.get(REG_COLORS) & 0xF
    }

    /// Foreground color nibble
    #[inline]
    pub fn foreground(&self) -> Half {
        (self.get(REG_COLORS) >> 4) & 0xF
    }

    /// Get the clip window from the CLIP register
    ///
    /// # Returns
    /// `(left, right)` pixel bounds, half open. A right edge byte of 0
    /// means 256.
    pub fn clip_window(&self) -> (i32, i32) {
        let clip = self.get(REG_CLIP);
        let left = (clip & 0xFF) as i32;
        let right = match clip >> 8 {
            0 => 0x100,
            r => r as i32,
        };
        (left, right)
    }
}
