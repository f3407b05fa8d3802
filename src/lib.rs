//! Boardgen
//!
//! Procedural generator for checkerboard game assets: an opaque board
//! texture and a semi-transparent highlight overlay, written as PNG files.
//!
//! Generation is a pure function from a board description to a pixel
//! `Grid`; persisting the grid is delegated to an `ImageSink`.
//!
//! # Example
//!
//! ```no_run
//! use boardgen::{AssetSpec, PngSink};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = AssetSpec::default();
//! let report = boardgen::render_asset(&spec, &mut PngSink::new())?;
//! println!("{} -> {}", report.path.display(), report.sha256);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::path::PathBuf;

pub mod board;
pub mod color;
pub mod error;
pub mod preset;
pub mod sink;

pub use board::{generate, Grid};
pub use color::{Color, ColorMode};
pub use error::{Error, Result};
pub use preset::Preset;
pub use sink::{ImageSink, MemorySink, PngSink};

/// Description of one asset to render
///
/// The default is the 8x8 board texture written to `output.png`.
///
/// # Examples
///
/// ```
/// let spec = boardgen::AssetSpec::default();
/// assert_eq!(spec.board_dim, 8);
/// assert_eq!(spec.mode(), boardgen::ColorMode::Rgb);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSpec {
    /// Cells per side
    pub board_dim: usize,
    /// Pixels per cell edge
    pub square_length: usize,
    /// Color of cell (0, 0) and every cell with an even `row + col`
    pub light: Color,
    /// Color of the remaining cells
    pub dark: Color,
    /// Destination file, relative to the working directory unless absolute
    pub output: PathBuf,
}

impl Default for AssetSpec {
    fn default() -> Self {
        Preset::Board.spec()
    }
}

impl AssetSpec {
    pub fn mode(&self) -> ColorMode {
        self.light.mode()
    }

    /// Side length of the rendered image in pixels
    pub fn side(&self) -> usize {
        self.board_dim * self.square_length
    }

    pub fn generate(&self) -> Result<Grid> {
        board::generate(self.board_dim, self.square_length, self.light, self.dark)
    }
}

/// Summary of a written asset, suitable for JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetReport {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub mode: ColorMode,
    /// SHA-256 of the raw pixel grid (not of the PNG bytes)
    pub sha256: String,
}

/// Generate the grid described by `spec` and hand it to `sink`.
pub fn render_asset<S: ImageSink + ?Sized>(spec: &AssetSpec, sink: &mut S) -> Result<AssetReport> {
    let grid = spec.generate()?;
    sink.write(&grid, &spec.output)?;
    Ok(AssetReport {
        path: spec.output.clone(),
        width: grid.width(),
        height: grid.height(),
        mode: grid.mode(),
        sha256: grid.digest(),
    })
}
