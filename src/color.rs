//! Color values and the color mode tag handed to image sinks.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel layout of a grid: three-channel RGB or four-channel RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorMode {
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable pixel color with either 3 or 4 channels.
///
/// Channel values are `u8`, so the [0, 255] range holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb([r, g, b])
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba([r, g, b, a])
    }

    /// Channel values in pixel order.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Color::Rgb(c) => c,
            Color::Rgba(c) => c,
        }
    }

    pub fn channels(&self) -> usize {
        self.mode().channels()
    }

    pub fn mode(&self) -> ColorMode {
        match self {
            Color::Rgb(_) => ColorMode::Rgb,
            Color::Rgba(_) => ColorMode::Rgba,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.as_bytes().iter().map(|c| c.to_string()).collect();
        write!(f, "({})", parts.join(","))
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `r,g,b`, `r,g,b,a`, `#rrggbb` and `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        let channels: Vec<u8> = if let Some(hex_digits) = trimmed.strip_prefix('#') {
            if hex_digits.len() != 6 && hex_digits.len() != 8 {
                return Err(invalid());
            }
            hex::decode(hex_digits).map_err(|_| invalid())?
        } else {
            trimmed
                .split(',')
                .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
                .collect::<Result<_>>()?
        };

        match channels.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_triples_and_quads() {
        assert_eq!("210,200,180".parse::<Color>().unwrap(), Color::rgb(210, 200, 180));
        assert_eq!(" 50, 50, 200, 80 ".parse::<Color>().unwrap(), Color::rgba(50, 50, 200, 80));
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#325a82".parse::<Color>().unwrap(), Color::rgb(50, 90, 130));
        assert_eq!("#3232C850".parse::<Color>().unwrap(), Color::rgba(50, 50, 200, 80));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "1,2", "1,2,3,4,5", "256,0,0", "#12345", "#zzzzzz", "red"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(Error::InvalidColor(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn mode_follows_arity() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.mode(), ColorMode::Rgba);
        assert_eq!(c.channels(), 4);
        assert_eq!(c.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(ColorMode::Rgb.to_string(), "RGB");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "(1,2,3)");
    }
}
