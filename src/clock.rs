//! Cycle Clock
//!
//! This module paces the blitter against the video beam. Work is charged in
//! M-cycles, each worth a fixed number of beam dots. The blit clock runs
//! ahead by the work charged and the engine then polls the beam until the
//! scan clock has caught up, so the blitter never gets ahead of the
//! hardware it models.
//!
//! The scan clock accumulates the distance the beam has moved between
//! polls, wrapping at the total logical line width.

use log::error;

/// Default beam dots per M-cycle
pub const DEFAULT_MCYCLE_TIME: u32 = 16;

/// Video timing source
pub trait BeamTiming {
    /// Current beam column; wraps at `total_logical_width()`
    fn dot_x(&mut self) -> u32;

    /// Dots per scanline, blanking included
    fn total_logical_width(&self) -> u32;

    /// Whether the blitter may use the bus at column `dot_x`
    fn is_blit_clock_enabled(&self, dot_x: u32) -> bool;
}

/// Blit clock and scan clock pair
#[derive(Debug, Clone)]
pub struct CycleClock {
    mcycle_time: i64,
    last_dot_x: u32,
    scan: i64,
    blit: i64,
    /// Set once the beam has run two scanlines ahead of the blit clock
    pub timing_fault: bool,
    /// Number of checks that observed the beam too far ahead
    pub fault_count: u64,
}

impl Default for CycleClock {
    fn default() -> Self {
        Self::new(DEFAULT_MCYCLE_TIME)
    }
}

impl CycleClock {
    /// Create a clock charging `mcycle_time` dots per M-cycle
    pub fn new(mcycle_time: u32) -> Self {
        Self {
            mcycle_time: mcycle_time as i64,
            last_dot_x: 0,
            scan: 0,
            blit: 0,
            timing_fault: false,
            fault_count: 0,
        }
    }

    /// Latch the beam position as the starting point for elapsed time
    pub fn sync<T: BeamTiming>(&mut self, beam: &mut T) {
        self.last_dot_x = beam.dot_x();
    }

    /// Blit clock, in dots
    pub fn blit_dots(&self) -> i64 {
        self.blit
    }

    /// Scan clock, in dots
    pub fn scan_dots(&self) -> i64 {
        self.scan
    }

    /// Total M-cycles charged so far
    pub fn mcycles(&self) -> u64 {
        (self.blit / self.mcycle_time) as u64
    }

    /// Charge `n` M-cycles of work and check the beam has not run away
    pub fn charge<T: BeamTiming>(&mut self, n: u32, beam: &T) {
        self.blit += self.mcycle_time * n as i64;

        let limit = beam.total_logical_width() as i64 * 2;
        if self.scan - self.blit >= limit {
            self.fault_count += 1;
            if !self.timing_fault {
                error!(
                    target: "blitter",
                    "beam is {} dots ahead of the blitter (limit {})",
                    self.scan - self.blit,
                    limit
                );
            }
            self.timing_fault = true;
        }
    }

    /// Charge one M-cycle spent waiting on the bus
    pub fn stall(&mut self) {
        self.blit += self.mcycle_time;
    }

    /// Poll the beam once and add the distance it moved to the scan clock
    pub fn poll<T: BeamTiming>(&mut self, beam: &mut T) -> u32 {
        let dot_x = beam.dot_x();
        let mut elapsed = dot_x as i64 - self.last_dot_x as i64;
        if elapsed < 0 {
            elapsed += beam.total_logical_width() as i64;
        }
        self.last_dot_x = dot_x;
        self.scan += elapsed;
        dot_x
    }

    /// Poll until the scan clock reaches the blit clock; returns the last
    /// column seen
    pub fn catch_up<T: BeamTiming>(&mut self, beam: &mut T) -> u32 {
        loop {
            let dot_x = self.poll(beam);
            if self.blit <= self.scan {
                return dot_x;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Beam that steps a fixed distance per poll
    struct StepBeam {
        x: u32,
        step: u32,
        width: u32,
        polls: u32,
    }

    impl StepBeam {
        fn new(step: u32, width: u32) -> Self {
            Self {
                x: 0,
                step,
                width,
                polls: 0,
            }
        }
    }

    impl BeamTiming for StepBeam {
        fn dot_x(&mut self) -> u32 {
            let x = self.x;
            self.x = (self.x + self.step) % self.width;
            self.polls += 1;
            x
        }

        fn total_logical_width(&self) -> u32 {
            self.width
        }

        fn is_blit_clock_enabled(&self, _dot_x: u32) -> bool {
            true
        }
    }

    #[test]
    fn test_charge_and_catch_up() {
        let mut beam = StepBeam::new(4, 800);
        let mut clock = CycleClock::new(16);
        clock.sync(&mut beam);

        clock.charge(2, &beam);
        assert_eq!(clock.blit_dots(), 32);

        clock.catch_up(&mut beam);
        assert!(clock.scan_dots() >= clock.blit_dots());
        assert_eq!(clock.scan_dots(), 32);
        assert_eq!(clock.mcycles(), 2);
        assert!(!clock.timing_fault);
    }

    #[test]
    fn test_elapsed_wraps_at_line_width() {
        let mut beam = StepBeam::new(30, 100);
        let mut clock = CycleClock::new(16);
        clock.sync(&mut beam);

        // 0 -> 30 -> 60 -> 90 -> 20 -> 50: every poll moves 30 dots
        for _ in 0..5 {
            clock.poll(&mut beam);
        }
        assert_eq!(clock.scan_dots(), 150);
    }

    #[test]
    fn test_clocks_are_monotonic() {
        let mut beam = StepBeam::new(7, 640);
        let mut clock = CycleClock::new(16);
        clock.sync(&mut beam);

        let mut last = (0, 0);
        for n in 1..50 {
            clock.charge(n % 3 + 1, &beam);
            clock.catch_up(&mut beam);
            assert!(clock.blit_dots() >= last.0);
            assert!(clock.scan_dots() >= last.1);
            last = (clock.blit_dots(), clock.scan_dots());
        }
    }

    #[test]
    fn test_divergence_sets_fault() {
        let mut beam = StepBeam::new(199, 200);
        let mut clock = CycleClock::new(1);
        clock.sync(&mut beam);

        // Let the beam run far ahead without charging work
        for _ in 0..4 {
            clock.poll(&mut beam);
        }
        assert!(clock.scan_dots() >= 400);

        clock.charge(1, &beam);
        assert!(clock.timing_fault);
        assert_eq!(clock.fault_count, 1);

        // Sticky, and keeps counting
        clock.charge(1, &beam);
        assert!(clock.timing_fault);
        assert_eq!(clock.fault_count, 2);
    }

    #[test]
    fn test_stall_skips_fault_check() {
        let mut beam = StepBeam::new(199, 200);
        let mut clock = CycleClock::new(1);
        clock.sync(&mut beam);
        for _ in 0..4 {
            clock.poll(&mut beam);
        }
        clock.stall();
        assert!(!clock.timing_fault);
        assert_eq!(clock.blit_dots(), 1);
    }
}
