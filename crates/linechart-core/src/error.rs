// File: crates/linechart-core/src/error.rs
// Summary: Error type for the fallible edges of the core (style loading, file output, input validation).

use std::io;
use thiserror::Error;

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// File read/write failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A style document could not be parsed.
    #[error("invalid chart style: {0}")]
    Style(#[from] serde_json::Error),

    /// Canvas extents must be finite and non-negative.
    #[error("invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: f32, height: f32 },
}
