//! Simulated Video
//!
//! A deterministic stand-in for the scan-out side of the hardware. The beam
//! moves a fixed number of dots every time it is polled, so a run is fully
//! reproducible: the blitter's own polling is what makes time pass.
//!
//! The simulated compositor owns the display bank pair and tells it when
//! each scanline starts, which is when pending swaps complete.

use crate::clock::BeamTiming;
use crate::config::{BlitWindow, SimConfig};
use crate::display::{BankId, BankManager, DisplayBank, DisplayBankPair, SwapMode};

/// Beam position plus display banks
#[derive(Debug, Clone)]
pub struct SimVideo {
    config: SimConfig,
    x: u32,
    line: u16,
    banks: DisplayBankPair,
    /// Completed frames
    pub frames: u64,
    /// Beam polls served
    pub polls: u64,
}

impl Default for SimVideo {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl SimVideo {
    /// Create a beam at the top-left corner, scanning and blitting bank A
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            x: 0,
            line: 0,
            banks: DisplayBankPair::new(),
            frames: 0,
            polls: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Beam column as of the last poll
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Current scanline
    pub fn line(&self) -> u16 {
        self.line
    }

    /// The bank pair, for inspection
    pub fn banks(&self) -> &DisplayBankPair {
        &self.banks
    }

    /// Bank the compositor is displaying
    pub fn scan_bank(&self) -> &DisplayBank {
        self.banks.bank(self.banks.current_scan_bank())
    }

    /// Bank blit writes land in
    pub fn blit_bank(&self) -> &DisplayBank {
        self.banks.bank(self.banks.current_blit_bank())
    }

    fn advance_beam(&mut self) {
        self.x += self.config.dots_per_poll;
        let width = self.config.total_width();
        while self.x >= width {
            self.x -= width;
            self.line += 1;
            if self.line >= self.config.lines_per_frame {
                self.line = 0;
                self.frames += 1;
            }
            self.banks.begin_line(self.line);
        }
    }
}

impl BeamTiming for SimVideo {
    fn dot_x(&mut self) -> u32 {
        self.polls += 1;
        self.advance_beam();
        self.x
    }

    fn total_logical_width(&self) -> u32 {
        self.config.total_width()
    }

    fn is_blit_clock_enabled(&self, dot_x: u32) -> bool {
        match self.config.blit_window {
            BlitWindow::Always => true,
            BlitWindow::BlankingOnly => dot_x >= self.config.display_width,
        }
    }
}

impl BankManager for SimVideo {
    fn current_blit_bank(&self) -> BankId {
        self.banks.current_blit_bank()
    }

    /// Lines past the end of the frame wrap, so short frames still reach
    /// the requested line
    fn request_swap(&mut self, mode: SwapMode, line_index: u8) {
        let line = (line_index as u16)
            .checked_rem(self.config.lines_per_frame)
            .unwrap_or(0);
        self.banks.request_swap(mode, line as u8);
    }

    fn is_swap_pending(&self) -> bool {
        self.banks.is_swap_pending()
    }

    fn bank(&self, id: BankId) -> &DisplayBank {
        self.banks.bank(id)
    }

    fn bank_mut(&mut self, id: BankId) -> &mut DisplayBank {
        self.banks.bank_mut(id)
    }
}
