//! Image sinks: where a finished grid goes once it has been generated.
//!
//! A sink receives a `Grid` (which carries its own `ColorMode`) and a
//! destination path. `PngSink` writes real files; `MemorySink` keeps the
//! encoded bytes around for tests and dry runs.

pub mod memory;
pub mod png;

pub use self::memory::MemorySink;
pub use self::png::{encode_png, PngSink};

use crate::board::Grid;
use crate::color::ColorMode;
use crate::Result;
use std::path::Path;

/// An encoded image ready to be persisted.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
    pub png_data: Vec<u8>,
}

/// Destination for generated grids.
pub trait ImageSink {
    /// Encode `grid` and store it under `path`, replacing anything already there.
    fn write(&mut self, grid: &Grid, path: &Path) -> Result<()>;
}
