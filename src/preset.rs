//! The fixed game assets: the board texture and the highlight overlay.

use crate::color::Color;
use crate::{AssetSpec, Error, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const BOARD_DIM: usize = 8;
pub const SQUARE_LENGTH: usize = 80;
pub const LIGHT: Color = Color::rgb(210, 200, 180);
pub const DARK: Color = Color::rgb(50, 90, 130);
pub const BOARD_OUTPUT: &str = "output.png";

/// Translucent blue laid over a single square to mark it.
pub const HIGHLIGHT: Color = Color::rgba(50, 50, 200, 80);
pub const HIGHLIGHT_OUTPUT: &str = "../assets/boards/highlight.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Opaque 8x8 checkerboard texture
    Board,
    /// Single translucent square overlay
    Highlight,
}

impl Preset {
    pub fn all() -> [Preset; 2] {
        [Preset::Board, Preset::Highlight]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Board => "board",
            Preset::Highlight => "highlight",
        }
    }

    pub fn spec(self) -> AssetSpec {
        match self {
            Preset::Board => AssetSpec {
                board_dim: BOARD_DIM,
                square_length: SQUARE_LENGTH,
                light: LIGHT,
                dark: DARK,
                output: PathBuf::from(BOARD_OUTPUT),
            },
            Preset::Highlight => AssetSpec {
                board_dim: 1,
                square_length: SQUARE_LENGTH,
                light: HIGHLIGHT,
                dark: HIGHLIGHT,
                output: PathBuf::from(HIGHLIGHT_OUTPUT),
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Preset as ValueEnum>::from_str(s.trim(), true).map_err(|_| Error::UnknownPreset(s.to_string()))
    }
}
