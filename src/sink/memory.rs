//! In-memory sink that keeps encoded PNGs keyed by their destination path

use super::{encode_png, EncodedImage, ImageSink};
use crate::board::Grid;
use crate::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MemorySink {
    outputs: Vec<(PathBuf, EncodedImage)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in write order.
    pub fn outputs(&self) -> &[(PathBuf, EncodedImage)] {
        &self.outputs
    }

    /// The latest image written to `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&EncodedImage> {
        self.outputs
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, img)| img)
    }
}

impl ImageSink for MemorySink {
    fn write(&mut self, grid: &Grid, path: &Path) -> Result<()> {
        let encoded = encode_png(grid)?;
        // Overwrite semantics: drop any earlier image at the same path.
        self.outputs.retain(|(p, _)| p != path);
        self.outputs.push((path.to_path_buf(), encoded));
        Ok(())
    }
}
