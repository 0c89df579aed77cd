//! Command Ring
//!
//! A circular buffer of command words kept in the first `2^fifo_wrap` words
//! of the blitter bank. The cycle clock fills it from the host bus while the
//! blitter waits on the beam, and the command adapter drains it. With a
//! `fifo_wrap` of zero the ring never has room and words go straight from
//! the bus to the command FIFO.

use crate::bank::BlitterBank;
use crate::common::Word;

/// Largest ring depth exponent that fits in the blitter bank
pub const MAX_FIFO_WRAP: u32 = 15;

/// Ring read/write cursors
#[derive(Debug, Clone, Default)]
pub struct CommandRing {
    begin: usize,
    end: usize,
    fifo_wrap: u32,
}

impl CommandRing {
    /// Create a ring of `2^fifo_wrap` words
    pub fn new(fifo_wrap: u32) -> Self {
        Self {
            begin: 0,
            end: 0,
            fifo_wrap: fifo_wrap.min(MAX_FIFO_WRAP),
        }
    }

    /// Ring depth exponent
    pub fn fifo_wrap(&self) -> u32 {
        self.fifo_wrap
    }

    /// Change the ring depth and rewind both cursors to word 0
    pub fn set_fifo_wrap(&mut self, fifo_wrap: u32) {
        debug_assert!(self.is_empty(), "ring resized while holding words");
        self.fifo_wrap = fifo_wrap.min(MAX_FIFO_WRAP);
        self.begin = 0;
        self.end = 0;
    }

    #[inline]
    fn wrap_mask(&self) -> usize {
        (1 << self.fifo_wrap) - 1
    }

    /// Check if the ring holds no words
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Check if another word fits; one slot always stays free
    #[inline]
    pub fn has_room(&self) -> bool {
        ((self.end + 1) & self.wrap_mask()) != self.begin
    }

    /// Number of words held
    pub fn len(&self) -> usize {
        self.end.wrapping_sub(self.begin) & self.wrap_mask()
    }

    /// Append a word at the write cursor
    pub fn push(&mut self, bank: &mut BlitterBank, word: Word) {
        bank.write_word(self.end, word);
        self.end = (self.end + 1) & self.wrap_mask();
    }

    /// Remove the word at the read cursor
    pub fn pop(&mut self, bank: &BlitterBank) -> Word {
        let word = bank.read_word(self.begin);
        self.begin = (self.begin + 1) & self.wrap_mask();
        word
    }
}
