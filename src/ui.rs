//! SDL2 Viewer
//!
//! This module shows the display bank being scanned out while the blitter
//! works through its command stream. Pixels are drawn as 16 gray levels.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use std::time::{Duration, Instant};

use crate::bus::HostBus;
use crate::display::DisplayBank;
use crate::engine::BlitterEngine;
use crate::sim::SimVideo;

/// Display bank dimensions in pixels
pub const SCREEN_WIDTH: u32 = 256;
pub const SCREEN_HEIGHT: u32 = 256;
/// Scale factor for the window
pub const SCALE: u32 = 3;

/// Commands run between frame checks
const COMMAND_BATCH: usize = 64;

/// SDL2 viewer window
pub struct Viewer {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    texture_creator: TextureCreator<WindowContext>,
}

impl Viewer {
    /// Open the viewer window
    pub fn new() -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(
                "blitter-rust",
                SCREEN_WIDTH * SCALE,
                SCREEN_HEIGHT * SCALE,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .software()
            .build()
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok(Self {
            canvas,
            event_pump,
            texture_creator,
        })
    }

    /// Run the blitter, presenting the scan bank once per simulated frame.
    ///
    /// The window stays open after the stream runs out, until it is closed
    /// or Escape is pressed.
    pub fn run(&mut self, engine: &mut BlitterEngine<HostBus, SimVideo>) -> Result<(), String> {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, SCREEN_WIDTH, SCREEN_HEIGHT)
            .map_err(|e| e.to_string())?;

        let frame_duration = Duration::from_secs_f64(1.0 / 60.0);
        let mut pixels = vec![0u8; (SCREEN_WIDTH * SCREEN_HEIGHT * 4) as usize];

        'running: loop {
            let frame_start = Instant::now();

            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => break 'running,
                    _ => {}
                }
            }

            // Step until the simulated beam finishes a frame
            let start_frame = engine.video().frames;
            while engine.has_pending_command() && engine.video().frames == start_frame {
                for _ in 0..COMMAND_BATCH {
                    if !engine.has_pending_command() {
                        break;
                    }
                    engine.step();
                }
            }

            render(engine.video().scan_bank(), &mut pixels);
            texture
                .update(None, &pixels, SCREEN_WIDTH as usize * 4)
                .map_err(|e| e.to_string())?;

            self.canvas.clear();
            self.canvas.copy(&texture, None, None)?;
            self.canvas.present();

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            }
        }

        Ok(())
    }
}

/// Expand a 4bpp bank to ARGB8888 gray
fn render(bank: &DisplayBank, out: &mut [u8]) {
    for (i, px) in out.chunks_exact_mut(4).enumerate() {
        let level = bank.pixel(i) * 0x11;
        px.copy_from_slice(&[level, level, level, 0xFF]);
    }
}
