//! Blitter Runner - Entry Point
//!
//! Loads a raw command stream, feeds it to the blitter through a simulated
//! host bus and beam, and reports what the run did.

use std::fs;
use std::path::PathBuf;
use std::process;

use blitter::bus::{HostBus, PAD_BYTE};
use blitter::common::Word;
use blitter::config::{BlitWindow, EngineConfig, SimConfig};
use blitter::display::BankManager;
use blitter::registers::NUM_REGS;
use blitter::sim::SimVideo;
use blitter::{BlitterEngine, Error, Result};
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "blitter-rust")]
#[command(about = "Run a blitter command stream against a simulated display", long_about = None)]
struct Args {
    /// Raw command stream file
    stream: PathBuf,

    /// Beam dots per M-cycle
    #[arg(long, default_value_t = 16)]
    mcycle_time: u32,

    /// log2 of the command ring depth (0 disables the ring)
    #[arg(long, default_value_t = 0)]
    fifo_wrap: u32,

    /// Beam dots that pass each time the blitter polls
    #[arg(long, default_value_t = 4)]
    dots_per_poll: u32,

    /// Only let the blitter run during horizontal blanking
    #[arg(long)]
    blanking_only: bool,

    /// Stop after this many commands
    #[arg(long)]
    max_commands: Option<u64>,

    /// Write the scan bank to this file when the stream is done
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Show the scan bank in a window (needs the `viewer` feature)
    #[arg(long)]
    view: bool,
}

type Engine = BlitterEngine<HostBus, SimVideo>;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("blitter-rust: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let bytes = fs::read(&args.stream)?;
    if bytes.is_empty() {
        return Err(Error::EmptyStream {
            path: args.stream.clone(),
        });
    }
    info!("loaded {} command bytes from {}", bytes.len(), args.stream.display());

    let engine_config = EngineConfig {
        mcycle_time: args.mcycle_time,
        fifo_wrap: args.fifo_wrap,
    };
    let sim_config = SimConfig {
        dots_per_poll: args.dots_per_poll,
        blit_window: if args.blanking_only {
            BlitWindow::BlankingOnly
        } else {
            BlitWindow::Always
        },
        ..SimConfig::default()
    };
    sim_config.validate()?;

    let mut bus = HostBus::from_bytes(&bytes);
    // A trailing NOP word lets a truncated final command complete
    bus.push_word(Word::from_le_bytes([PAD_BYTE; 4]));

    let mut engine = BlitterEngine::new(engine_config, bus, SimVideo::new(sim_config))?;

    if args.view {
        view(&mut engine)?;
    } else {
        execute(&mut engine, args.max_commands);
    }

    report(&engine);

    if let Some(path) = &args.dump {
        let scan = engine.video().scan_bank();
        let data: Vec<u8> = scan.words().iter().flat_map(|w| w.to_le_bytes()).collect();
        fs::write(path, data)?;
        info!("scan bank written to {}", path.display());
    }

    Ok(())
}

fn execute(engine: &mut Engine, max_commands: Option<u64>) {
    while engine.has_pending_command() {
        if max_commands.is_some_and(|max| engine.stats.commands >= max) {
            info!("command limit reached");
            break;
        }
        engine.step();
    }
}

#[cfg(feature = "viewer")]
fn view(engine: &mut Engine) -> Result<()> {
    let mut viewer = blitter::ui::Viewer::new().map_err(Error::Viewer)?;
    viewer.run(engine).map_err(Error::Viewer)
}

#[cfg(not(feature = "viewer"))]
fn view(_engine: &mut Engine) -> Result<()> {
    Err(Error::Config(
        "--view needs a build with the `viewer` feature".into(),
    ))
}

fn report(engine: &Engine) {
    let stats = engine.stats;
    println!("Commands: {} ({} blits, {} swaps)", stats.commands, stats.blits, stats.swaps);
    println!("M-cycles: {}", engine.clock().mcycles());
    println!("Frames: {}", engine.video().frames);
    println!("Blit bank: {:?}", engine.video().current_blit_bank());
    if engine.timing_fault() {
        println!(
            "Timing fault: beam ran ahead {} time(s)",
            engine.clock().fault_count
        );
    }

    for idx in 0..NUM_REGS {
        debug!("R{:<2} = {:04X}", idx, engine.regs().get(idx));
    }
}
