//! Configuration
//!
//! Settings for the engine and for the simulated video timing that drives
//! it outside real hardware.

use crate::clock::DEFAULT_MCYCLE_TIME;
use crate::error::{Error, Result};
use crate::ring::MAX_FIFO_WRAP;

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Beam dots per M-cycle
    pub mcycle_time: u32,
    /// log2 of the command ring depth in words; 0 disables the ring
    pub fifo_wrap: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mcycle_time: DEFAULT_MCYCLE_TIME,
            fifo_wrap: 0,
        }
    }
}

impl EngineConfig {
    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.mcycle_time == 0 {
            return Err(Error::Config("mcycle_time must be at least 1".into()));
        }
        if self.fifo_wrap > MAX_FIFO_WRAP {
            return Err(Error::Config(format!(
                "fifo_wrap {} exceeds {} (ring must fit in the blitter bank)",
                self.fifo_wrap, MAX_FIFO_WRAP
            )));
        }
        Ok(())
    }
}

/// When the simulated compositor lets the blitter run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlitWindow {
    /// Every column
    #[default]
    Always,
    /// Only during horizontal blanking
    BlankingOnly,
}

/// Simulated beam settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Visible dots per line
    pub display_width: u32,
    /// Blanking dots per line
    pub blank_width: u32,
    /// Lines per frame, blanking included
    pub lines_per_frame: u16,
    /// Dots the beam moves each time the blitter polls it
    pub dots_per_poll: u32,
    pub blit_window: BlitWindow,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            display_width: 640,
            blank_width: 160,
            lines_per_frame: 525,
            dots_per_poll: 4,
            blit_window: BlitWindow::Always,
        }
    }
}

impl SimConfig {
    /// Dots per line, blanking included
    pub fn total_width(&self) -> u32 {
        self.display_width + self.blank_width
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_width() == 0 {
            return Err(Error::Config("line width must be non-zero".into()));
        }
        if self.lines_per_frame == 0 {
            return Err(Error::Config("lines_per_frame must be non-zero".into()));
        }
        if self.dots_per_poll == 0 || self.dots_per_poll >= self.total_width() {
            return Err(Error::Config(format!(
                "dots_per_poll must be in 1..{}",
                self.total_width()
            )));
        }
        if self.blit_window == BlitWindow::BlankingOnly && self.blank_width == 0 {
            return Err(Error::Config(
                "blanking-only blit window needs a non-zero blank width".into(),
            ));
        }
        Ok(())
    }
}
