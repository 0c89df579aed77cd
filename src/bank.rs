//! Blitter Bank
//!
//! This module implements the blitter's private 128KB memory. It holds
//! off-screen images, the PUSH/POP operand stack and the command ring.
//!
//! Word accessors take word addresses; the packed byte and half-word
//! accessors take byte addresses. Every address wraps at the bank size.

use crate::common::{Byte, Half, Word};

/// Bank size in bytes (128KB)
pub const BLITTER_BANK_BYTES: usize = 128 * 1024;

/// Bank size in 32-bit words
pub const BLITTER_BANK_WORDS: usize = BLITTER_BANK_BYTES / 4;

/// Blitter Bank storage
#[derive(Debug, Clone)]
pub struct BlitterBank {
    words: Box<[Word]>,
}

impl Default for BlitterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl BlitterBank {
    /// Create a new bank with all memory zeroed
    pub fn new() -> Self {
        Self {
            words: vec![0; BLITTER_BANK_WORDS].into_boxed_slice(),
        }
    }

    /// Read the word at a word address
    #[inline]
    pub fn read_word(&self, addr: usize) -> Word {
        self.words[addr & (BLITTER_BANK_WORDS - 1)]
    }

    /// Write the word at a word address
    #[inline]
    pub fn write_word(&mut self, addr: usize, data: Word) {
        self.words[addr & (BLITTER_BANK_WORDS - 1)] = data;
    }

    /// Read the half-word containing a byte address (little-endian lanes)
    #[inline]
    pub fn read_half(&self, byte_addr: usize) -> Half {
        let half = (byte_addr >> 1) & (BLITTER_BANK_BYTES / 2 - 1);
        (self.words[half >> 1] >> ((half & 1) * 16)) as Half
    }

    /// Read the byte at a byte address (little-endian lanes)
    #[inline]
    pub fn read_byte(&self, byte_addr: usize) -> Byte {
        let byte_addr = byte_addr & (BLITTER_BANK_BYTES - 1);
        (self.words[byte_addr >> 2] >> ((byte_addr & 3) * 8)) as Byte
    }

    /// Copy a run of words into the bank starting at a word address
    pub fn load_words(&mut self, addr: usize, data: &[Word]) {
        for (i, &word) in data.iter().enumerate() {
            self.write_word(addr + i, word);
        }
    }

    /// Copy a run of bytes into the bank starting at a byte address
    pub fn load_bytes(&mut self, byte_addr: usize, data: &[Byte]) {
        for (i, &byte) in data.iter().enumerate() {
            let addr = (byte_addr + i) & (BLITTER_BANK_BYTES - 1);
            let shift = (addr & 3) * 8;
            let word = &mut self.words[addr >> 2];
            *word = (*word & !(0xFF << shift)) | ((byte as Word) << shift);
        }
    }
}
