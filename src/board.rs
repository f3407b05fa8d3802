//! Checkerboard pixel-grid generation.
//!
//! The board is `board_dim` cells per side, each cell `square_length`
//! pixels. Cell (r, c) takes `light` when `r + c` is even, `dark` otherwise.

use crate::color::{Color, ColorMode};
use crate::{Error, Result};
use log::debug;
use sha2::{Digest, Sha256};

/// Largest grid, in bytes of pixel data, that `generate` will allocate.
pub const MAX_GRID_BYTES: usize = 1 << 30;

/// A fully materialized image: one `Vec<u8>` of channel values per pixel row,
/// top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
    mode: ColorMode,
}

impl Grid {
    /// Wrap pre-built rows, checking that every row matches the declared mode.
    pub fn from_rows(rows: Vec<Vec<u8>>, mode: ColorMode) -> Result<Self> {
        let grid = Self { rows, mode };
        grid.check_shape()?;
        Ok(grid)
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn channels(&self) -> usize {
        self.mode.channels()
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of integers in each row
    pub fn row_len(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.row_len() / self.channels()
    }

    /// Channel values of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let ch = self.channels();
        self.rows.get(y)?.get(x * ch..(x + 1) * ch)
    }

    /// Row-major concatenation of all rows.
    pub fn to_raw(&self) -> Vec<u8> {
        self.rows.concat()
    }

    /// SHA-256 of the raw pixel bytes, hex encoded.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for row in &self.rows {
            hasher.update(row);
        }
        hex::encode(hasher.finalize())
    }

    /// Verify the grid is non-empty, rectangular and a whole number of pixels wide.
    pub fn check_shape(&self) -> Result<()> {
        let row_len = self.row_len();
        let ch = self.channels();
        if self.rows.is_empty() || row_len == 0 {
            return Err(Error::GridShape("grid has no pixels".into()));
        }
        if row_len % ch != 0 {
            return Err(Error::GridShape(format!(
                "row length {} is not a multiple of {} channels ({})",
                row_len, ch, self.mode
            )));
        }
        if let Some((y, row)) = self.rows.iter().enumerate().find(|(_, r)| r.len() != row_len) {
            return Err(Error::GridShape(format!(
                "row {} has {} values, expected {}",
                y,
                row.len(),
                row_len
            )));
        }
        Ok(())
    }
}

/// Build one pixel row: `board_dim` cells of `square_length` pixels,
/// alternating between `current` and `next` at every cell boundary.
pub fn create_row(board_dim: usize, square_length: usize, current: Color, next: Color) -> Vec<u8> {
    let mut output = Vec::with_capacity(board_dim * square_length * current.channels());
    let (mut current, mut next) = (current, next);
    for _ in 0..board_dim {
        for _ in 0..square_length {
            output.extend_from_slice(current.as_bytes());
        }
        std::mem::swap(&mut current, &mut next);
    }
    output
}

/// Generate a checkerboard grid.
///
/// Returns `InvalidDimension` for zero-sized boards, images wider than a
/// PNG can describe or larger than `MAX_GRID_BYTES`, and `ChannelMismatch`
/// when `light` and `dark` disagree on arity. A one-cell board with equal
/// colors is a flat fill.
pub fn generate(board_dim: usize, square_length: usize, light: Color, dark: Color) -> Result<Grid> {
    validate(board_dim, square_length, &light, &dark)?;

    let side = board_dim * square_length;
    debug!(
        "generating {}x{} {} board ({} cells of {}px)",
        side,
        side,
        light.mode(),
        board_dim,
        square_length
    );

    let mut rows = Vec::with_capacity(side);
    let (mut current, mut next) = (light, dark);
    for _ in 0..board_dim {
        let row = create_row(board_dim, square_length, current, next);
        for _ in 0..square_length {
            rows.push(row.clone());
        }
        std::mem::swap(&mut current, &mut next);
    }

    Ok(Grid {
        rows,
        mode: light.mode(),
    })
}

fn validate(board_dim: usize, square_length: usize, light: &Color, dark: &Color) -> Result<()> {
    if board_dim == 0 || square_length == 0 {
        return Err(Error::InvalidDimension(format!(
            "board_dim ({}) and square_length ({}) must be positive",
            board_dim, square_length
        )));
    }
    if light.channels() != dark.channels() {
        return Err(Error::ChannelMismatch {
            light: light.channels(),
            dark: dark.channels(),
        });
    }
    let fits = board_dim
        .checked_mul(square_length)
        .filter(|side| u32::try_from(*side).is_ok())
        .and_then(|side| side.checked_mul(side))
        .and_then(|area| area.checked_mul(light.channels()));
    match fits {
        None => Err(Error::InvalidDimension(format!(
            "{} cells of {}px do not fit in an image",
            board_dim, square_length
        ))),
        Some(bytes) if bytes > MAX_GRID_BYTES => Err(Error::InvalidDimension(format!(
            "{} cells of {}px need {} bytes, limit is {}",
            board_dim, square_length, bytes, MAX_GRID_BYTES
        ))),
        Some(_) => Ok(()),
    }
}
