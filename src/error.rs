//! Errors
//!
//! The blitter core itself never fails; these cover the surfaces around it.

use std::path::PathBuf;

/// Errors raised while configuring or driving the blitter
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Engine or simulation settings out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error reading a command stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command stream file held no bytes.
    #[error("Command stream {path} is empty")]
    EmptyStream { path: PathBuf },

    /// SDL2 window or renderer failure.
    #[error("Viewer error: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
