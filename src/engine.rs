//! Blitter Engine
//!
//! This module ties the blitter together: register file, blitter bank,
//! command ring and FIFO, cycle clock, and the two external collaborators
//! (the host bus and the video side). It decodes and executes the command
//! stream one command at a time.
//!
//! The blit algorithm itself lives in [`crate::pipeline`].

use log::trace;

use crate::bank::BlitterBank;
use crate::bus::CommandBus;
use crate::clock::{BeamTiming, CycleClock};
use crate::command::Command;
use crate::common::{Byte, Half, Word};
use crate::config::EngineConfig;
use crate::display::{BankId, BankManager, SwapMode};
use crate::error::Result;
use crate::fifo::BitFifo;
use crate::registers::{RegisterFile, REG_STACK_ADDR};
use crate::ring::CommandRing;

/// Counters for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Commands executed, NOPs included
    pub commands: u64,
    pub blits: u64,
    /// Swap requests that have completed
    pub swaps: u64,
}

/// The blitter
pub struct BlitterEngine<B: CommandBus, V: BeamTiming + BankManager> {
    pub(crate) regs: RegisterFile,
    pub(crate) bank: BlitterBank,
    cmd_fifo: BitFifo,
    ring: CommandRing,
    pub(crate) clock: CycleClock,
    bus: B,
    pub(crate) video: V,
    /// Display bank blits target, refreshed after each swap
    pub(crate) blit_bank: BankId,
    pub stats: EngineStats,
}

impl<B: CommandBus, V: BeamTiming + BankManager> BlitterEngine<B, V> {
    /// Create an engine attached to a host bus and a video source
    pub fn new(config: EngineConfig, bus: B, mut video: V) -> Result<Self> {
        config.validate()?;

        let mut clock = CycleClock::new(config.mcycle_time);
        clock.sync(&mut video);
        let blit_bank = video.current_blit_bank();

        Ok(Self {
            regs: RegisterFile::new(),
            bank: BlitterBank::new(),
            cmd_fifo: BitFifo::new(),
            ring: CommandRing::new(config.fifo_wrap),
            clock,
            bus,
            video,
            blit_bank,
            stats: EngineStats::default(),
        })
    }

    // ========== Accessors ==========

    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    pub fn bank(&self) -> &BlitterBank {
        &self.bank
    }

    /// Blitter bank, for preloading images
    pub fn bank_mut(&mut self) -> &mut BlitterBank {
        &mut self.bank
    }

    pub fn clock(&self) -> &CycleClock {
        &self.clock
    }

    /// Whether the beam has ever run two lines ahead
    pub fn timing_fault(&self) -> bool {
        self.clock.timing_fault
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn video(&self) -> &V {
        &self.video
    }

    pub fn video_mut(&mut self) -> &mut V {
        &mut self.video
    }

    /// Display bank blits currently write to
    pub fn blit_bank(&self) -> BankId {
        self.blit_bank
    }

    pub fn fifo_wrap(&self) -> u32 {
        self.ring.fifo_wrap()
    }

    /// Host write of the ring depth register; only valid while the ring
    /// is empty
    pub fn set_fifo_wrap(&mut self, fifo_wrap: u32) {
        self.ring.set_fifo_wrap(fifo_wrap);
    }

    // ========== Timing ==========

    /// Charge `n` M-cycles, then wait for the beam.
    ///
    /// While waiting, host words move into the command ring one per
    /// M-cycle. Returns once the beam has caught up and the compositor
    /// lets the blitter run.
    pub fn advance(&mut self, n: u32) {
        self.clock.charge(n, &self.video);

        loop {
            let dot_x = self.clock.catch_up(&mut self.video);

            if !self.bus.fifo_empty() && self.ring.has_room() {
                let word = self.bus.pop_fifo();
                self.ring.push(&mut self.bank, word);
                self.clock.stall();
                continue;
            }

            if !self.video.is_blit_clock_enabled(dot_x) {
                self.clock.stall();
                continue;
            }

            return;
        }
    }

    // ========== Command source ==========

    /// Next `n` bits of the command stream (`n` up to 32), waiting for them
    /// to arrive
    pub fn pop_bits(&mut self, n: u32) -> Word {
        loop {
            if self.cmd_fifo.len() >= n {
                return self.cmd_fifo.pop(n);
            }

            if !self.ring.is_empty() {
                let word = self.ring.pop(&self.bank);
                self.cmd_fifo.push(word, 32);
            } else if !self.bus.fifo_empty() {
                // Ring disabled or drained
                let word = self.bus.pop_fifo();
                self.cmd_fifo.push(word, 32);
            }

            self.advance(1);
        }
    }

    /// Whether any command bits are buffered or waiting on the bus
    pub fn has_pending_command(&self) -> bool {
        !self.cmd_fifo.is_empty() || !self.ring.is_empty() || !self.bus.fifo_empty()
    }

    // ========== Dispatch ==========

    /// Fetch, decode and execute one command
    pub fn step(&mut self) {
        let opcode = self.pop_bits(8) as Byte;
        self.advance(1);

        let command = Command::decode(opcode);
        trace!(target: "blitter", "{:02X} {:?}", opcode, command);
        self.stats.commands += 1;

        match command {
            Command::Set(reg) => {
                let value = self.pop_bits(16) as Half;
                self.regs.set(reg, value);
            }
            Command::Push(reg) => self.push_register(reg),
            Command::Pop(reg) => self.pop_register(reg),
            Command::Move { src, dest } => self.regs.copy(dest, src),
            Command::Swap(mode) => self.swap_banks(mode),
            Command::Blit(op) => {
                self.stats.blits += 1;
                self.blit(op);
            }
        }
    }

    /// Execute commands forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn push_register(&mut self, reg: usize) {
        let top = self.regs.get(REG_STACK_ADDR);
        self.regs.set(REG_STACK_ADDR, top.wrapping_add(1));
        self.advance(1);
        self.bank.write_word(top as usize, self.regs.get(reg) as Word);
    }

    fn pop_register(&mut self, reg: usize) {
        let top = self.regs.get(REG_STACK_ADDR).wrapping_sub(1);
        self.regs.set(reg, self.bank.read_word(top as usize) as Half);
        self.regs.set(REG_STACK_ADDR, top);
        self.advance(1);
    }

    fn swap_banks(&mut self, mode: SwapMode) {
        let line = self.regs.count_low() as u8;
        self.video.request_swap(mode, line);

        while self.video.is_swap_pending() {
            self.advance(1);
        }

        self.blit_bank = self.video.current_blit_bank();
        self.stats.swaps += 1;
    }
}
