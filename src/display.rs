//! Display Banks
//!
//! This module implements the double-buffered display memory shared with the
//! scan-out compositor, and the bank-swap protocol between them.
//!
//! One bank is the "scan" bank (read by the compositor) and one is the
//! "blit" bank (written by the blitter); both roles may name the same bank.
//! A swap request only takes effect when the compositor reaches the
//! requested scanline, so the blitter polls for completion.

use crate::common::{Half, Word};
use log::debug;

/// Display bank size in 32-bit words (32KB)
pub const DISPLAY_BANK_WORDS: usize = 32 * 1024 / 4;

/// log2 of the guard page size in words (2KB pages)
pub const GUARD_PAGE_SHIFT: u32 = 9;

/// One of the two physical display banks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankId {
    A,
    B,
}

impl BankId {
    #[inline]
    fn index(self) -> usize {
        match self {
            BankId::A => 0,
            BankId::B => 1,
        }
    }
}

/// Scan/blit bank assignment requested by a SWAP command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapMode {
    ScanABlitA = 0,
    ScanBBlitB = 1,
    ScanABlitB = 2,
    ScanBBlitA = 3,
}

impl SwapMode {
    /// Decode the low two bits of a SWAP opcode
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x3 {
            0 => SwapMode::ScanABlitA,
            1 => SwapMode::ScanBBlitB,
            2 => SwapMode::ScanABlitB,
            _ => SwapMode::ScanBBlitA,
        }
    }

    /// Bank the compositor displays after the swap
    pub fn scan(self) -> BankId {
        match self {
            SwapMode::ScanABlitA | SwapMode::ScanABlitB => BankId::A,
            SwapMode::ScanBBlitB | SwapMode::ScanBBlitA => BankId::B,
        }
    }

    /// Bank the blitter writes after the swap
    pub fn blit(self) -> BankId {
        match self {
            SwapMode::ScanABlitA | SwapMode::ScanBBlitA => BankId::A,
            SwapMode::ScanBBlitB | SwapMode::ScanABlitB => BankId::B,
        }
    }
}

/// Word-addressed pixel memory, eight 4-bit pixels per word
#[derive(Debug, Clone)]
pub struct DisplayBank {
    words: Box<[Word]>,
}

impl Default for DisplayBank {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBank {
    /// Create a new bank with all pixels zeroed
    pub fn new() -> Self {
        Self {
            words: vec![0; DISPLAY_BANK_WORDS].into_boxed_slice(),
        }
    }

    /// Read the word at a word address
    #[inline]
    pub fn read(&self, addr: usize) -> Word {
        self.words[addr & (DISPLAY_BANK_WORDS - 1)]
    }

    /// Merge `data` into the word at `addr` under `mask`.
    ///
    /// The write is dropped when the 2KB page holding `addr` has its bit set
    /// in `guard`.
    #[inline]
    pub fn write(&mut self, addr: usize, data: Word, mask: Word, guard: Half) {
        let addr = addr & (DISPLAY_BANK_WORDS - 1);
        if is_guarded(addr, guard) {
            return;
        }
        let old = self.words[addr];
        self.words[addr] = (old & !mask) | (data & mask);
    }

    /// All words of the bank, in address order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Fill the whole bank with one word value
    pub fn fill(&mut self, value: Word) {
        self.words.fill(value);
    }

    /// Pixel value at a pixel address (low nibble first within a word)
    pub fn pixel(&self, pixel_addr: usize) -> u8 {
        ((self.read(pixel_addr >> 3) >> ((pixel_addr & 7) * 4)) & 0xF) as u8
    }
}

/// Check whether a display word address falls on a guarded page
#[inline]
pub fn is_guarded(addr: usize, guard: Half) -> bool {
    let page = (addr & (DISPLAY_BANK_WORDS - 1)) >> GUARD_PAGE_SHIFT;
    (guard >> page) & 1 != 0
}

/// Display bank manager, as seen by the blitter
pub trait BankManager {
    /// Bank that blit writes currently target
    fn current_blit_bank(&self) -> BankId;

    /// Ask for a new scan/blit assignment at the given scanline
    fn request_swap(&mut self, mode: SwapMode, line_index: u8);

    /// Check whether the last swap request has not yet taken effect
    fn is_swap_pending(&self) -> bool;

    /// Shared pixel memory for a bank
    fn bank(&self, id: BankId) -> &DisplayBank;

    /// Mutable pixel memory for a bank
    fn bank_mut(&mut self, id: BankId) -> &mut DisplayBank;
}

/// Swap request waiting for its scanline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSwap {
    mode: SwapMode,
    line: u8,
}

/// Reference double-buffered bank manager.
///
/// The compositor side calls [`DisplayBankPair::begin_line`] at the start of
/// each scanline; a pending swap completes when its line comes up.
#[derive(Debug, Clone)]
pub struct DisplayBankPair {
    banks: [DisplayBank; 2],
    scan: BankId,
    blit: BankId,
    pending: Option<PendingSwap>,
    /// Number of swaps that have taken effect
    pub swaps_completed: u64,
}

impl Default for DisplayBankPair {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBankPair {
    /// Create a pair scanning and blitting bank A
    pub fn new() -> Self {
        Self {
            banks: [DisplayBank::new(), DisplayBank::new()],
            scan: BankId::A,
            blit: BankId::A,
            pending: None,
            swaps_completed: 0,
        }
    }

    /// Bank the compositor is displaying
    pub fn current_scan_bank(&self) -> BankId {
        self.scan
    }

    /// Compositor notification that scanline `y` is starting
    pub fn begin_line(&mut self, y: u16) {
        if let Some(pending) = self.pending {
            if y == pending.line as u16 {
                self.complete(pending.mode);
            }
        }
    }

    /// Apply any pending swap immediately
    pub fn flush_pending(&mut self) {
        if let Some(pending) = self.pending {
            self.complete(pending.mode);
        }
    }

    fn complete(&mut self, mode: SwapMode) {
        self.scan = mode.scan();
        self.blit = mode.blit();
        self.pending = None;
        self.swaps_completed += 1;
        debug!(target: "blitter", "bank swap complete: scan {:?}, blit {:?}", self.scan, self.blit);
    }
}

impl BankManager for DisplayBankPair {
    fn current_blit_bank(&self) -> BankId {
        self.blit
    }

    fn request_swap(&mut self, mode: SwapMode, line_index: u8) {
        self.pending = Some(PendingSwap {
            mode,
            line: line_index,
        });
    }

    fn is_swap_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn bank(&self, id: BankId) -> &DisplayBank {
        &self.banks[id.index()]
    }

    fn bank_mut(&mut self, id: BankId) -> &mut DisplayBank {
        &mut self.banks[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_mode_decode() {
        assert_eq!(SwapMode::from_bits(0), SwapMode::ScanABlitA);
        assert_eq!(SwapMode::from_bits(1), SwapMode::ScanBBlitB);
        assert_eq!(SwapMode::from_bits(2), SwapMode::ScanABlitB);
        assert_eq!(SwapMode::from_bits(3), SwapMode::ScanBBlitA);
        assert_eq!(SwapMode::from_bits(0x3A), SwapMode::ScanABlitB);

        assert_eq!(SwapMode::ScanABlitB.scan(), BankId::A);
        assert_eq!(SwapMode::ScanABlitB.blit(), BankId::B);
        assert_eq!(SwapMode::ScanBBlitA.scan(), BankId::B);
        assert_eq!(SwapMode::ScanBBlitA.blit(), BankId::A);
    }

    #[test]
    fn test_masked_write() {
        let mut bank = DisplayBank::new();
        bank.write(10, 0xFFFF_FFFF, 0x0000_FF00, 0);
        assert_eq!(bank.read(10), 0x0000_FF00);

        bank.write(10, 0x1234_5678, 0xFFFF_0000, 0);
        assert_eq!(bank.read(10), 0x1234_FF00);
    }

    #[test]
    fn test_guarded_page_is_read_only() {
        let mut bank = DisplayBank::new();

        // Page 1 covers words 512..1024
        let guard = 0b10;
        bank.write(511, 0xAAAA_AAAA, 0xFFFF_FFFF, guard);
        bank.write(512, 0xAAAA_AAAA, 0xFFFF_FFFF, guard);
        bank.write(1023, 0xAAAA_AAAA, 0xFFFF_FFFF, guard);
        bank.write(1024, 0xAAAA_AAAA, 0xFFFF_FFFF, guard);

        assert_eq!(bank.read(511), 0xAAAA_AAAA);
        assert_eq!(bank.read(512), 0);
        assert_eq!(bank.read(1023), 0);
        assert_eq!(bank.read(1024), 0xAAAA_AAAA);
    }

    #[test]
    fn test_addresses_wrap() {
        let mut bank = DisplayBank::new();
        bank.write(DISPLAY_BANK_WORDS + 1, 0x77, 0xFF, 0);
        assert_eq!(bank.read(1), 0x77);
    }

    #[test]
    fn test_pixel_lookup() {
        let mut bank = DisplayBank::new();
        bank.write(1, 0x8765_4321, 0xFFFF_FFFF, 0);
        assert_eq!(bank.pixel(8), 0x1);
        assert_eq!(bank.pixel(15), 0x8);
    }

    #[test]
    fn test_swap_waits_for_line() {
        let mut pair = DisplayBankPair::new();
        pair.request_swap(SwapMode::ScanABlitB, 5);
        assert!(pair.is_swap_pending());
        assert_eq!(pair.current_blit_bank(), BankId::A);

        pair.begin_line(4);
        assert!(pair.is_swap_pending());

        pair.begin_line(5);
        assert!(!pair.is_swap_pending());
        assert_eq!(pair.current_blit_bank(), BankId::B);
        assert_eq!(pair.current_scan_bank(), BankId::A);
        assert_eq!(pair.swaps_completed, 1);
    }

    #[test]
    fn test_later_request_replaces_pending() {
        let mut pair = DisplayBankPair::new();
        pair.request_swap(SwapMode::ScanABlitB, 5);
        pair.request_swap(SwapMode::ScanBBlitA, 9);

        pair.begin_line(5);
        assert!(pair.is_swap_pending());

        pair.flush_pending();
        assert_eq!(pair.current_scan_bank(), BankId::B);
        assert_eq!(pair.current_blit_bank(), BankId::A);
    }

    #[test]
    fn test_banks_are_independent() {
        let mut pair = DisplayBankPair::new();
        pair.bank_mut(BankId::B).write(0, 0xF, 0xF, 0);
        assert_eq!(pair.bank(BankId::A).read(0), 0);
        assert_eq!(pair.bank(BankId::B).read(0), 0xF);
    }
}
