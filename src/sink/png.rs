//! PNG encoding via the `png` crate.

use super::{EncodedImage, ImageSink};
use crate::board::Grid;
use crate::color::ColorMode;
use crate::{Error, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Writes grids to disk as 8-bit PNG files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngSink;

impl PngSink {
    pub fn new() -> Self {
        PngSink
    }
}

impl ImageSink for PngSink {
    fn write(&mut self, grid: &Grid, path: &Path) -> Result<()> {
        let encoded = encode_png(grid)?;
        ensure_parent_dir(path)?;
        fs::write(path, &encoded.png_data)?;
        info!(
            "wrote {} ({}x{} {}, {} bytes)",
            path.display(),
            encoded.width,
            encoded.height,
            encoded.mode,
            encoded.png_data.len()
        );
        Ok(())
    }
}

/// Encode a grid as PNG bytes without touching the filesystem.
pub fn encode_png(grid: &Grid) -> Result<EncodedImage> {
    grid.check_shape()?;
    let width = u32::try_from(grid.width())
        .map_err(|_| Error::GridShape(format!("width {} exceeds PNG limits", grid.width())))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| Error::GridShape(format!("height {} exceeds PNG limits", grid.height())))?;

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(color_type(grid.mode()));
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&grid.to_raw())?;
        writer.finish()?;
    }

    Ok(EncodedImage {
        width,
        height,
        mode: grid.mode(),
        png_data,
    })
}

fn color_type(mode: ColorMode) -> png::ColorType {
    match mode {
        ColorMode::Rgb => png::ColorType::Rgb,
        ColorMode::Rgba => png::ColorType::Rgba,
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
