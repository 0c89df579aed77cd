//! Command Encoding
//!
//! Opcode layout:
//! - `0000dddd` SET dddd, followed by a 16-bit immediate
//! - `00010sss` PUSH sss
//! - `00011ddd` POP ddd
//! - `0010ssdd` MOVE ss -> dd (`0x20` is MOVE R0,R0, the NOP)
//! - `00110sdd` MOVE, same fields as `0x20-0x27`
//! - `001110nn` SWAP nn
//! - `01xxxxxx`, `10xxxxxx`, `11xxxxxx` blit to COLORS, display or blitter bank
//!
//! The low six bits of a blit select enables, orientation and source.

use bitflags::bitflags;

use crate::bus::HostBus;
use crate::common::{Byte, Half, Word};
use crate::display::SwapMode;

pub const OPCODE_SET: Byte = 0x00;
pub const OPCODE_PUSH: Byte = 0x10;
pub const OPCODE_POP: Byte = 0x18;
pub const OPCODE_MOVE: Byte = 0x20;
pub const OPCODE_NOP: Byte = 0x20;
pub const OPCODE_SWAP: Byte = 0x38;
pub const OPCODE_BLIT_BASE: Byte = 0x40;

pub const OPCODE_DSAMPLE: Byte = 0x48;
pub const OPCODE_DCLEAR: Byte = 0xA4;
pub const OPCODE_DDCOPY: Byte = 0x8A;
pub const OPCODE_DSTREAM: Byte = 0xB0;
pub const OPCODE_BSTREAM: Byte = 0xF0;
pub const OPCODE_RECT: Byte = 0xAC;
pub const OPCODE_IMAGE: Byte = 0x9F;

bitflags! {
    /// Low bits of a blit opcode
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BlitEnables: u8 {
        /// Honor the FLAGS register
        const FLAGS = 0x01;
        /// Honor the CLIP register
        const CLIP = 0x02;
        /// Honor the COLORS register as a remap pair
        const COLOR = 0x04;
        /// Width x height rectangle instead of a linear run
        const PLANAR = 0x08;
    }
}

bitflags! {
    /// Single-bit fields of the FLAGS register
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BlitFlags: u16 {
        /// Source value 0 is transparent
        const MASKED = 0x0400;
    }
}

/// Blit source selector, opcode bits 4-5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitSource {
    Display,
    Blitter,
    Zero,
    Stream,
}

/// Blit destination selector, opcode bits 6-7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitDest {
    Colors,
    Display,
    Blitter,
}

/// A decoded blit opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlitOp(Byte);

impl BlitOp {
    /// Wrap a blit opcode; `opcode` must be at least `0x40`
    pub fn new(opcode: Byte) -> Self {
        debug_assert!(opcode >= OPCODE_BLIT_BASE, "not a blit opcode: {:02X}", opcode);
        BlitOp(opcode)
    }

    /// Build an opcode from its fields
    pub fn compose(source: BlitSource, dest: BlitDest, enables: BlitEnables) -> Self {
        let src = match source {
            BlitSource::Display => 0x00,
            BlitSource::Blitter => 0x10,
            BlitSource::Zero => 0x20,
            BlitSource::Stream => 0x30,
        };
        let dst = match dest {
            BlitDest::Colors => 0x40,
            BlitDest::Display => 0x80,
            BlitDest::Blitter => 0xC0,
        };
        BlitOp(dst | src | enables.bits())
    }

    /// Raw opcode byte
    pub fn opcode(self) -> Byte {
        self.0
    }

    pub fn enables(self) -> BlitEnables {
        BlitEnables::from_bits_truncate(self.0)
    }

    pub fn is_planar(self) -> bool {
        self.enables().contains(BlitEnables::PLANAR)
    }

    pub fn source(self) -> BlitSource {
        match (self.0 >> 4) & 0x3 {
            0 => BlitSource::Display,
            1 => BlitSource::Blitter,
            2 => BlitSource::Zero,
            _ => BlitSource::Stream,
        }
    }

    pub fn dest(self) -> BlitDest {
        match self.0 >> 6 {
            1 => BlitDest::Colors,
            2 => BlitDest::Display,
            _ => BlitDest::Blitter,
        }
    }
}

/// One decoded command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Load a register from the 16-bit immediate that follows
    Set(usize),
    /// Store a register at the stack pointer and bump it
    Push(usize),
    /// Drop the stack pointer and load a register from it
    Pop(usize),
    /// Copy one register into another
    Move { src: usize, dest: usize },
    /// Request a display bank swap
    Swap(SwapMode),
    Blit(BlitOp),
}

impl Command {
    /// Decode an opcode byte
    pub fn decode(opcode: Byte) -> Self {
        match opcode {
            0x00..=0x0F => Command::Set((opcode & 0xF) as usize),
            0x10..=0x17 => Command::Push((opcode & 0x7) as usize),
            0x18..=0x1F => Command::Pop((opcode & 0x7) as usize),
            0x20..=0x37 => Command::Move {
                src: ((opcode >> 2) & 0x3) as usize,
                dest: (opcode & 0x3) as usize,
            },
            0x38..=0x3F => Command::Swap(SwapMode::from_bits(opcode)),
            _ => Command::Blit(BlitOp::new(opcode)),
        }
    }
}

/// Builds a command byte stream
#[derive(Debug, Clone, Default)]
pub struct CommandWriter {
    bytes: Vec<Byte>,
}

impl CommandWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw byte
    pub fn byte(&mut self, value: Byte) -> &mut Self {
        self.bytes.push(value);
        self
    }

    /// SET reg, value
    pub fn set(&mut self, reg: usize, value: Half) -> &mut Self {
        self.byte(OPCODE_SET | (reg & 0xF) as Byte);
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// PUSH reg (0-7)
    pub fn push(&mut self, reg: usize) -> &mut Self {
        debug_assert!(reg < 8, "PUSH only addresses R0-R7");
        self.byte(OPCODE_PUSH | (reg & 0x7) as Byte)
    }

    /// POP reg (0-7)
    pub fn pop(&mut self, reg: usize) -> &mut Self {
        debug_assert!(reg < 8, "POP only addresses R0-R7");
        self.byte(OPCODE_POP | (reg & 0x7) as Byte)
    }

    /// MOVE src -> dest (both 0-3)
    pub fn mov(&mut self, src: usize, dest: usize) -> &mut Self {
        self.byte(OPCODE_MOVE | ((src & 0x3) << 2) as Byte | (dest & 0x3) as Byte)
    }

    pub fn nop(&mut self) -> &mut Self {
        self.byte(OPCODE_NOP)
    }

    /// SWAP; the line index is taken from COUNT
    pub fn swap(&mut self, mode: SwapMode) -> &mut Self {
        self.byte(OPCODE_SWAP | mode as Byte)
    }

    /// Blit with a raw opcode
    pub fn blit(&mut self, opcode: Byte) -> &mut Self {
        debug_assert!(opcode >= OPCODE_BLIT_BASE);
        self.byte(opcode)
    }

    /// Inline source words for a stream blit
    pub fn stream(&mut self, words: &[Word]) -> &mut Self {
        for word in words {
            self.bytes.extend_from_slice(&word.to_le_bytes());
        }
        self
    }

    /// Bytes written so far
    pub fn bytes(&self) -> &[Byte] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<Byte> {
        self.bytes
    }

    /// Package the stream as a host bus, padded to a whole word
    pub fn into_bus(self) -> HostBus {
        HostBus::from_bytes(&self.bytes)
    }
}
