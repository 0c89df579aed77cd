//! Pixel Pipeline
//!
//! The blit algorithm. Pixels flow from the source through a 64-bit bit
//! queue to the destination, a word at a time on each side:
//!
//! 1. The source side reads one word (raw, unpacked, from the display bank,
//!    from the command stream, or zero) and pushes the bits that fall inside
//!    the current row.
//! 2. The destination side pops the bits for its next word, clips them,
//!    drops transparent lanes, remaps colors, blends with the old
//!    destination, and writes the result back under a lane mask.
//!
//! X coordinates are in bits from here on, four per pixel. Planar display
//! rows can start mid-word, which shows up as a negative starting x (the
//! "skew") so the first word of a row is partially masked.

use log::debug;

use crate::alu::BlendOp;
use crate::bus::CommandBus;
use crate::clock::BeamTiming;
use crate::command::{BlitDest, BlitEnables, BlitFlags, BlitOp, BlitSource};
use crate::common::{span_mask, splat_nibble, Half, Word, LANE_BITS, WORD_BITS};
use crate::display::BankManager;
use crate::engine::BlitterEngine;
use crate::fifo::BitFifo;
use crate::registers::{REG_COLORS, REG_COUNT, REG_DEST_ADDR, REG_FLAGS, REG_GUARD, REG_SRC_ADDR};
use crate::unpack::{unpack_16_32, unpack_8_16, unpack_8_32, UnpackMode};

/// Clip window used when clipping is off, in pixels
const OPEN_CLIP: (i32, i32) = (0, 0x1_0000);

/// Lowest bit of every lane
const LANE_LSB: Word = 0x1111_1111;

/// Low two bits of every lane
const LANE_LOW2: Word = 0x3333_3333;

/// Compile-time choice between a fetched and a constant-zero source
pub trait SourceMode {
    /// No source words are read; every destination word sees zero
    const ZERO: bool;
    /// M-cycles per destination word before blending
    const BASE_CYCLES: u32;
}

/// Source words come from memory or the command stream
pub struct Fetched;

/// Source is the constant zero
pub struct ZeroSource;

impl SourceMode for Fetched {
    const ZERO: bool = false;
    const BASE_CYCLES: u32 = 2;
}

impl SourceMode for ZeroSource {
    const ZERO: bool = true;
    const BASE_CYCLES: u32 = 1;
}

/// How each source word is produced, chosen once per blit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRead {
    /// Word from the blit display bank
    Display,
    /// Raw word from the blitter bank
    Raw,
    /// Blitter bank half-word, 2bpp to 4bpp
    Unpack16To32,
    /// Blitter bank byte, 1bpp to 4bpp
    Unpack8To32,
    /// Blitter bank byte, 1bpp to 2bpp
    Unpack8To16,
    Zero,
    /// Next 32 bits of the command stream
    Stream,
}

impl SourceRead {
    /// Pick the reader for a blit; `flags` is zero when FLAGS is disabled
    pub fn select(op: BlitOp, flags: Half) -> Self {
        match op.source() {
            BlitSource::Display => SourceRead::Display,
            BlitSource::Zero => SourceRead::Zero,
            BlitSource::Stream => SourceRead::Stream,
            BlitSource::Blitter => match UnpackMode::from_flags(flags) {
                UnpackMode::Off => SourceRead::Raw,
                UnpackMode::Expand16To32 => SourceRead::Unpack16To32,
                UnpackMode::Expand8To32 => SourceRead::Unpack8To32,
                UnpackMode::Expand8To16 => SourceRead::Unpack8To16,
            },
        }
    }
}

/// Bits `[begin, end)` of the word at row position `x` that lie inside a
/// row of `width` bits
#[inline]
fn overlap(x: i32, width: i32) -> (i32, i32) {
    ((-x).max(0), (width - x).min(WORD_BITS))
}

/// All-ones in every lane whose value is non-zero
#[inline]
fn nonzero_lanes(color: Word) -> Word {
    let mut m = color;
    m |= (m & !LANE_LOW2) >> 2;
    m |= (m & !LANE_LSB) >> 1;
    m &= LANE_LSB;
    m |= m << 1;
    m |= m << 2;
    m
}

/// Row cursor shared by the source and destination sides
#[derive(Debug, Clone, Copy)]
struct Cursor {
    /// Display pixel address of the row start
    daddr: i32,
    /// Display word address of the next word
    word: i32,
    /// Bit position in the row of the next word
    x: i32,
    /// Current row; -1 before the first
    y: i32,
}

impl Cursor {
    fn new(daddr: i32, pitch: i32, width: i32) -> Self {
        Self {
            daddr: daddr - pitch,
            word: 0,
            x: width,
            y: -1,
        }
    }

    /// Step to the start of the next row
    fn next_row(&mut self, pitch: i32, planar: bool) {
        self.daddr += pitch;
        self.word = self.daddr >> 3;
        self.y += 1;
        self.x = if planar { -(self.daddr & 0x7) * LANE_BITS } else { 0 };
    }
}

impl<B: CommandBus, V: BeamTiming + BankManager> BlitterEngine<B, V> {
    /// Dispatch a blit on its source selector
    pub fn blit(&mut self, op: BlitOp) {
        if op.source() == BlitSource::Zero {
            self.run_blit_zero_source(op);
        } else {
            self.run_blit(op);
        }
    }

    /// Blit from a fetched source
    pub fn run_blit(&mut self, op: BlitOp) {
        self.run_blit_with::<Fetched>(op);
    }

    /// Blit from the constant-zero source
    pub fn run_blit_zero_source(&mut self, op: BlitOp) {
        self.run_blit_with::<ZeroSource>(op);
    }

    /// Width and height in pixels for a blit
    pub fn blit_extent(&self, op: BlitOp) -> (i32, i32) {
        let count = self.regs.get(REG_COUNT);
        if op.is_planar() {
            let width = match count & 0xFF {
                0 => 0x100,
                w => w as i32,
            };
            let height = match count >> 8 {
                0 => 0x100,
                h => h as i32,
            };
            (width, height)
        } else {
            let width = match count {
                0 => 0x1_0000,
                w => w as i32,
            };
            (width, 1)
        }
    }

    fn run_blit_with<M: SourceMode>(&mut self, op: BlitOp) {
        let enables = op.enables();
        let planar = op.is_planar();

        let dest_addr = self.regs.get(REG_DEST_ADDR);
        let src_addr = self.regs.get(REG_SRC_ADDR);
        let pitch = self.regs.pitch();
        let mut dest_baddr = dest_addr as usize;
        let mut src_baddr_byte = src_addr as usize * 4;

        let flags = if enables.contains(BlitEnables::FLAGS) {
            self.regs.get(REG_FLAGS)
        } else {
            0
        };
        let blend = BlendOp::from_flags(flags);
        let mask_disable: Word = if BlitFlags::from_bits_truncate(flags).contains(BlitFlags::MASKED) {
            0
        } else {
            !0
        };

        let (bg_color, fg_color) = if enables.contains(BlitEnables::COLOR) {
            (splat_nibble(self.regs.background()), splat_nibble(self.regs.foreground()))
        } else {
            (0, !0)
        };

        let (clip_left, clip_right) = if enables.contains(BlitEnables::CLIP) {
            self.regs.clip_window()
        } else {
            OPEN_CLIP
        };
        let clip_left = clip_left * LANE_BITS;
        let clip_right = clip_right * LANE_BITS;

        let (width_px, height) = self.blit_extent(op);
        let width = width_px * LANE_BITS;

        let dest = op.dest();
        let src_planar = planar && op.source() == BlitSource::Display;
        let dest_planar = planar && dest == BlitDest::Display;

        let read = if M::ZERO {
            SourceRead::Zero
        } else {
            SourceRead::select(op, flags)
        };

        debug!(
            target: "blitter",
            "blit {:02X}: {}x{} {:?} -> {:?}, {:?}",
            op.opcode(),
            width_px,
            height,
            read,
            dest,
            blend
        );

        let mut fifo = BitFifo::new();
        let mut src = Cursor::new(src_addr as i32, pitch, width);
        let mut dst = Cursor::new(dest_addr as i32, pitch, width);
        let cycles = M::BASE_CYCLES + blend.reads_dest() as u32;

        loop {
            if src.x >= width {
                src.next_row(pitch, src_planar);
            }

            if M::ZERO || (fifo.len() <= 32 && src.y < height) {
                if !M::ZERO {
                    let data = self.read_source(read, src.word, &mut src_baddr_byte);
                    let (begin, end) = overlap(src.x, width);
                    fifo.push(data >> begin, (end - begin) as u32);
                }
                src.x += WORD_BITS;
                src.word += 1;
            }

            if dst.x >= width {
                dst.next_row(pitch, dest_planar);
                if dst.y == height {
                    return;
                }
            }

            let (begin, end) = overlap(dst.x, width);
            let num = (end - begin) as u32;
            if M::ZERO || fifo.len() >= num {
                let color = if M::ZERO { 0 } else { fifo.pop(num) << begin };

                let mut mask = span_mask(begin.max(clip_left - dst.x), end.min(clip_right - dst.x));
                mask &= nonzero_lanes(color) | mask_disable;

                let mut color = (fg_color & color) | (bg_color & !color);
                if blend.reads_dest() {
                    let old = self.read_dest(dest, dst.word, dest_baddr);
                    color = blend.apply(color, old);
                }

                self.advance(cycles);
                self.write_dest(dest, dst.word, dest_baddr, color, mask);

                dst.x += WORD_BITS;
                dst.word += 1;
                dest_baddr += 1;
            } else {
                self.advance(cycles);
            }
        }
    }

    fn read_source(&mut self, read: SourceRead, daddr_word: i32, baddr_byte: &mut usize) -> Word {
        match read {
            SourceRead::Display => self.video.bank(self.blit_bank).read(daddr_word as usize),
            SourceRead::Raw => {
                let data = self.bank.read_word(*baddr_byte >> 2);
                *baddr_byte += UnpackMode::Off.stride();
                data
            }
            SourceRead::Unpack16To32 => {
                let data = unpack_16_32(self.bank.read_half(*baddr_byte));
                *baddr_byte += UnpackMode::Expand16To32.stride();
                data
            }
            SourceRead::Unpack8To32 => {
                let data = unpack_8_32(self.bank.read_byte(*baddr_byte));
                *baddr_byte += UnpackMode::Expand8To32.stride();
                data
            }
            SourceRead::Unpack8To16 => {
                let data = unpack_8_16(self.bank.read_byte(*baddr_byte));
                *baddr_byte += UnpackMode::Expand8To16.stride();
                data
            }
            SourceRead::Zero => 0,
            SourceRead::Stream => self.pop_bits(32),
        }
    }

    fn read_dest(&self, dest: BlitDest, daddr_word: i32, baddr: usize) -> Word {
        match dest {
            BlitDest::Blitter => self.bank.read_word(baddr),
            BlitDest::Display => self.video.bank(self.blit_bank).read(daddr_word as usize),
            BlitDest::Colors => self.regs.get(REG_COLORS) as Word,
        }
    }

    fn write_dest(&mut self, dest: BlitDest, daddr_word: i32, baddr: usize, data: Word, mask: Word) {
        match dest {
            BlitDest::Blitter => {
                let old = self.bank.read_word(baddr);
                self.bank.write_word(baddr, (old & !mask) | (data & mask));
            }
            BlitDest::Display => {
                let guard = self.regs.get(REG_GUARD);
                let bank = self.blit_bank;
                self.video.bank_mut(bank).write(daddr_word as usize, data, mask, guard);
            }
            BlitDest::Colors => {
                let old = self.regs.get(REG_COLORS) as Word;
                self.regs.set(REG_COLORS, ((old & !mask) | (data & mask)) as Half);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::*;
    use crate::display::BankId;
    use crate::engine::testing::*;
    use crate::registers::*;
    use proptest::prelude::*;

    /// Opcode for a linear zero-source clear of the display with clipping
    const CLIPPED_CLEAR: u8 = OPCODE_DCLEAR | 0x02;

    fn mcycles_for(writer: CommandWriter) -> u64 {
        run_stream(writer).clock().mcycles()
    }

    #[test]
    fn test_overlap() {
        assert_eq!(overlap(0, 128), (0, 32));
        assert_eq!(overlap(-12, 128), (12, 32));
        assert_eq!(overlap(96, 100), (0, 4));
        assert_eq!(overlap(-20, 4), (20, 24));
    }

    #[test]
    fn test_nonzero_lanes() {
        assert_eq!(nonzero_lanes(0), 0);
        assert_eq!(nonzero_lanes(0x8000_0001), 0xF000_000F);
        assert_eq!(nonzero_lanes(0x0420_0100), 0x0FF0_0F00);
        assert_eq!(nonzero_lanes(0xFFFF_FFFF), 0xFFFF_FFFF);
    }

    #[test]
    fn test_source_read_selection() {
        let image = BlitOp::new(OPCODE_IMAGE);
        assert_eq!(SourceRead::select(image, 0), SourceRead::Raw);
        assert_eq!(SourceRead::select(image, 0x0100), SourceRead::Unpack8To16);
        assert_eq!(SourceRead::select(image, 0x0200), SourceRead::Unpack8To32);
        assert_eq!(SourceRead::select(image, 0x0300), SourceRead::Unpack16To32);
        assert_eq!(SourceRead::select(BlitOp::new(OPCODE_DDCOPY), 0x0300), SourceRead::Display);
        assert_eq!(SourceRead::select(BlitOp::new(OPCODE_BSTREAM), 0), SourceRead::Stream);
        assert_eq!(SourceRead::select(BlitOp::new(OPCODE_RECT), 0), SourceRead::Zero);
    }

    #[test]
    fn test_extent() {
        let mut w = CommandWriter::new();
        w.set(REG_COUNT, 0x0310);
        let e = run_stream(w);
        assert_eq!(e.blit_extent(BlitOp::new(OPCODE_RECT)), (0x10, 3));
        assert_eq!(e.blit_extent(BlitOp::new(OPCODE_DCLEAR)), (0x310, 1));

        let e = run_stream(CommandWriter::new());
        assert_eq!(e.blit_extent(BlitOp::new(OPCODE_RECT)), (256, 256));
        assert_eq!(e.blit_extent(BlitOp::new(OPCODE_DCLEAR)), (65536, 1));
    }

    #[test]
    fn test_bstream_writes_words_unchanged() {
        let words = [0x0123_4567, 0x89AB_CDEF, 0xDEAD_BEEF, 0x0000_FFFF];
        let mut w = CommandWriter::new();
        w.set(REG_DEST_ADDR, 16)
            .set(REG_COUNT, 32)
            .blit(OPCODE_BSTREAM)
            .stream(&words)
            .set(3, 0x1234);
        let e = run_stream(w);

        for (i, &word) in words.iter().enumerate() {
            assert_eq!(e.bank().read_word(16 + i), word);
        }
        assert_eq!(e.bank().read_word(15), 0);
        assert_eq!(e.bank().read_word(20), 0);
        // The command after the stream decodes cleanly
        assert_eq!(e.regs().get(3), 0x1234);
        assert_eq!(e.stats.blits, 1);
    }

    #[test]
    fn test_dstream_linear_ignores_low_address_bits() {
        let mut w = CommandWriter::new();
        w.set(REG_DEST_ADDR, 8 + 3)
            .set(REG_COUNT, 8)
            .blit(OPCODE_DSTREAM)
            .stream(&[0x8765_4321]);
        let e = run_stream(w);

        assert_eq!(e.video().bank(BankId::A).read(1), 0x8765_4321);
    }

    #[test]
    fn test_rect_uses_background_color() {
        let mut w = CommandWriter::new();
        w.set(REG_DEST_ADDR, 0)
            .set(REG_PITCH, 256)
            .set(REG_COUNT, 0x0208)
            .set(REG_COLORS, 0xC3)
            .blit(OPCODE_RECT);
        let e = run_stream(w);

        let bank = e.video().bank(BankId::A);
        assert_eq!(bank.read(0), 0x3333_3333);
        assert_eq!(bank.read(32), 0x3333_3333);
        assert_eq!(bank.read(1), 0);
        assert_eq!(bank.read(64), 0);
    }

    #[test]
    fn test_planar_rect_with_skew() {
        // Three pixels starting at column 6 straddle two words
        let mut w = CommandWriter::new();
        w.set(REG_DEST_ADDR, 6)
            .set(REG_PITCH, 256)
            .set(REG_COUNT, 0x0103)
            .set(REG_COLORS, 0x09)
            .blit(OPCODE_RECT);
        let e = run_stream(w);

        let bank = e.video().bank(BankId::A);
        assert_eq!(bank.read(0), 0x9900_0000);
        assert_eq!(bank.read(1), 0x0000_0009);
    }

    #[test]
    fn test_ddcopy_unaligned() {
        let mut w = CommandWriter::new();
        w.set(REG_SRC_ADDR, 3)
            .set(REG_DEST_ADDR, 10)
            .set(REG_PITCH, 256)
            .set(REG_COUNT, 0x0108)
            .blit(OPCODE_DDCOPY);
        let mut e = engine(w);

        // Pixels 3..11 hold 1..8
        let bank = e.video_mut().bank_mut(BankId::A);
        bank.write(0, 0x5432_1000, 0xFFFF_FFFF, 0);
        bank.write(1, 0x0000_0876, 0xFFFF_FFFF, 0);
        bank.write(2, 0xEEEE_EEEE, 0xFFFF_FFFF, 0);
        drain(&mut e);

        let bank = e.video().bank(BankId::A);
        for i in 0..8 {
            assert_eq!(bank.pixel(10 + i), i as u8 + 1, "pixel {}", 10 + i);
        }
        assert_eq!(bank.pixel(8), 0x6);
        assert_eq!(bank.pixel(9), 0x7);
        assert_eq!(bank.pixel(18), 0xE);
        assert_eq!(bank.pixel(2), 0);
    }

    #[test]
    fn test_masked_zero_is_transparent() {
        for (flags, expected) in [(0x0400, 0x3F3F_3F3F), (0x0000, 0x0F0F_0F0F)] {
            let mut w = CommandWriter::new();
            w.set(REG_SRC_ADDR, 0x40)
                .set(REG_DEST_ADDR, 0)
                .set(REG_COUNT, 8)
                .set(REG_FLAGS, flags)
                .blit(0x91);
            let mut e = engine(w);
            e.bank_mut().write_word(0x40, 0x0F0F_0F0F);
            e.video_mut().bank_mut(BankId::A).fill(0x3333_3333);
            drain(&mut e);

            assert_eq!(e.video().bank(BankId::A).read(0), expected, "flags {:04X}", flags);
        }
    }

    #[test]
    fn test_unpacked_image_with_color_remap() {
        // 1bpp glyph row 0b1010_0101 drawn in color 0xE on background 0x2
        let mut w = CommandWriter::new();
        w.set(REG_SRC_ADDR, 0x80)
            .set(REG_DEST_ADDR, 0)
            .set(REG_PITCH, 256)
            .set(REG_COUNT, 0x0108)
            .set(REG_FLAGS, 0x0200)
            .set(REG_COLORS, 0xE2)
            .blit(OPCODE_IMAGE);
        let mut e = engine(w);
        e.bank_mut().load_bytes(0x80 * 4, &[0b1010_0101]);
        drain(&mut e);

        assert_eq!(e.video().bank(BankId::A).read(0), 0xE2E2_2E2E);
    }

    #[test]
    fn test_unpack_16_to_32_source() {
        let mut w = CommandWriter::new();
        w.set(REG_SRC_ADDR, 0x10)
            .set(REG_DEST_ADDR, 0x20)
            .set(REG_COUNT, 16)
            .set(REG_FLAGS, 0x0300)
            .blit(0xD1);
        let mut e = engine(w);
        e.bank_mut().write_word(0x10, 0x00FF_00E4);
        drain(&mut e);

        assert_eq!(e.bank().read_word(0x20), 0x0000_FA50);
        assert_eq!(e.bank().read_word(0x21), 0x0000_FFFF);
    }

    #[test]
    fn test_guarded_pages_block_writes() {
        let mut w = CommandWriter::new();
        w.set(REG_GUARD, 0b10)
            .set(REG_DEST_ADDR, 510 * 8)
            .set(REG_COUNT, 32)
            .set(REG_COLORS, 0x0A)
            .blit(OPCODE_DCLEAR);
        let e = run_stream(w);

        let bank = e.video().bank(BankId::A);
        assert_eq!(bank.read(510), 0xAAAA_AAAA);
        assert_eq!(bank.read(511), 0xAAAA_AAAA);
        assert_eq!(bank.read(512), 0);
        assert_eq!(bank.read(513), 0);
    }

    #[test]
    fn test_dsample_reads_pixel_into_colors() {
        let mut w = CommandWriter::new();
        w.set(REG_SRC_ADDR, 5)
            .set(REG_COUNT, 0x0101)
            .set(REG_COLORS, 0x0050)
            .blit(OPCODE_DSAMPLE);
        let mut e = engine(w);
        e.video_mut().bank_mut(BankId::A).write(0, 0x00A0_0000, 0xFFFF_FFFF, 0);
        drain(&mut e);

        assert_eq!(e.regs().get(REG_COLORS), 0x005A);
        assert_eq!(e.regs().shadow_value(REG_COLORS), 0x005A);
    }

    #[test]
    fn test_blend_xor_into_blitter_bank() {
        // Zero source with color remap: every lane becomes the background
        let mut w = CommandWriter::new();
        w.set(REG_DEST_ADDR, 0x30)
            .set(REG_COUNT, 8)
            .set(REG_COLORS, 0x0F)
            .set(REG_FLAGS, 0x0003)
            .blit(0xE5);
        let mut e = engine(w);
        e.bank_mut().write_word(0x30, 0x1234_5678);
        drain(&mut e);

        assert_eq!(e.bank().read_word(0x30), 0xEDCB_A987);
    }

    #[test]
    fn test_blend_add_saturates() {
        let mut w = CommandWriter::new();
        w.set(REG_DEST_ADDR, 0x30)
            .set(REG_COUNT, 8)
            .set(REG_COLORS, 0x09)
            .set(REG_FLAGS, 0x0006)
            .blit(0xE5);
        let mut e = engine(w);
        e.bank_mut().write_word(0x30, 0x0123_4567);
        drain(&mut e);

        assert_eq!(e.bank().read_word(0x30), 0x9ABC_DEFF);
    }

    #[test]
    fn test_cycles_per_destination_word() {
        fn clear(count: Half, opcode: u8, flags: Half) -> CommandWriter {
            let mut w = CommandWriter::new();
            w.set(REG_COUNT, count).set(REG_FLAGS, flags).blit(opcode);
            w
        }

        // Zero source: one M-cycle per word
        let short = mcycles_for(clear(16, OPCODE_DCLEAR, 0));
        let long = mcycles_for(clear(32, OPCODE_DCLEAR, 0));
        assert_eq!(long - short, 2);

        // Blending adds one
        let short = mcycles_for(clear(16, OPCODE_DCLEAR | 0x01, 0x0003));
        let long = mcycles_for(clear(32, OPCODE_DCLEAR | 0x01, 0x0003));
        assert_eq!(long - short, 4);

        // Fetched source: two per word
        let short = mcycles_for(clear(16, 0x80, 0));
        let long = mcycles_for(clear(32, 0x80, 0));
        assert_eq!(long - short, 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_clip_window_bounds_writes(left in 0u16..72, right in 0u16..72) {
            let mut w = CommandWriter::new();
            w.set(REG_COUNT, 64)
                .set(REG_CLIP, (right << 8) | left)
                .set(REG_COLORS, 0x0F)
                .blit(CLIPPED_CLEAR);
            let e = run_stream(w);

            let right = if right == 0 { 256 } else { right as usize };
            let bank = e.video().bank(BankId::A);
            for px in 0..80usize {
                let inside = px < 64 && px >= left as usize && px < right;
                prop_assert_eq!(bank.pixel(px), if inside { 0xF } else { 0 }, "pixel {}", px);
            }
        }

        #[test]
        fn prop_masked_zero_never_writes(src: u32, dest: u32) {
            let mut w = CommandWriter::new();
            w.set(REG_SRC_ADDR, 0x40)
                .set(REG_COUNT, 8)
                .set(REG_FLAGS, 0x0400)
                .blit(0xD1);
            let mut e = engine(w);
            e.bank_mut().write_word(0x40, src);
            e.bank_mut().write_word(0, dest);
            drain(&mut e);

            let result = e.bank().read_word(0);
            for lane in 0..8 {
                let shift = lane * 4;
                let s = (src >> shift) & 0xF;
                let expected = if s == 0 { (dest >> shift) & 0xF } else { s };
                prop_assert_eq!((result >> shift) & 0xF, expected);
            }
        }
    }
}
