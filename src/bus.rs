//! Command Bus
//!
//! This module defines the blitter's view of the host bus bridge: a FIFO of
//! 32-bit words written asynchronously by the host CPU. Each word carries
//! four command bytes, the first byte in bits 0-7.

use std::collections::VecDeque;

use crate::common::{Byte, Word};

/// Host-fed command FIFO trait
pub trait CommandBus {
    /// Check if the host has no words waiting
    fn fifo_empty(&self) -> bool;

    /// Take the oldest word; only called when `fifo_empty()` is false
    fn pop_fifo(&mut self) -> Word;
}

/// In-memory host bus producer
///
/// Bytes are packed into words in arrival order. A trailing partial word is
/// held back until it is completed or [`HostBus::flush`] pads it.
#[derive(Debug, Clone, Default)]
pub struct HostBus {
    words: VecDeque<Word>,
    partial: Word,
    partial_len: u32,
    /// Total number of words handed to the blitter
    pub words_popped: u64,
}

/// Byte used to pad a partial word (MOVE R0,R0)
pub const PAD_BYTE: Byte = 0x20;

impl HostBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bus holding a byte stream, padded to a whole word
    pub fn from_bytes(bytes: &[Byte]) -> Self {
        let mut bus = Self::new();
        bus.push_bytes(bytes);
        bus.flush();
        bus
    }

    /// Queue one already-packed word
    pub fn push_word(&mut self, word: Word) {
        debug_assert_eq!(self.partial_len, 0, "word pushed over a partial word");
        self.words.push_back(word);
    }

    /// Queue command bytes
    pub fn push_bytes(&mut self, bytes: &[Byte]) {
        for &byte in bytes {
            self.partial |= (byte as Word) << (self.partial_len * 8);
            self.partial_len += 1;
            if self.partial_len == 4 {
                self.words.push_back(self.partial);
                self.partial = 0;
                self.partial_len = 0;
            }
        }
    }

    /// Complete a trailing partial word with padding bytes
    pub fn flush(&mut self) {
        while self.partial_len != 0 {
            self.push_bytes(&[PAD_BYTE]);
        }
    }

    /// Number of complete words waiting
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no complete words are waiting
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl CommandBus for HostBus {
    fn fifo_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn pop_fifo(&mut self) -> Word {
        match self.words.pop_front() {
            Some(word) => {
                self.words_popped += 1;
                word
            }
            None => {
                debug_assert!(false, "pop from empty host fifo");
                0
            }
        }
    }
}
