//! Blitter Coprocessor Library
//!
//! This library provides a cycle-accurate model of a programmable 2D blitter.
//! It executes a compact command stream against a private blitter bank and a
//! double-buffered display, pacing itself against the video beam.

pub mod common;
pub mod alu;
pub mod bank;
pub mod bus;
pub mod clock;
pub mod command;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod fifo;
pub mod pipeline;
pub mod registers;
pub mod ring;
pub mod sim;
pub mod unpack;
#[cfg(feature = "viewer")]
pub mod ui;

pub use engine::BlitterEngine;
pub use error::{Error, Result};
