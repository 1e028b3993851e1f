//! Rendering of recorded observations.
use crate::{Channel, Grid, Position, RoomsEnv};
use anyhow::{anyhow, Result};
use image::{
    imageops::{resize, FilterType::Nearest},
    ImageBuffer, Rgb,
};
use log::info;
use std::{fs, path::Path};

/// Side length in pixels of a cell in saved frames.
pub const CELL_PIXELS: u32 = 16;

/// Converts an observation to an RGB image, one pixel per cell.
///
/// The agent, goal and obstacle channels are drawn in red, green and blue.
pub fn grid_to_image(grid: &Grid) -> Result<ImageBuffer<Rgb<u8>, Vec<u8>>> {
    let (w, h) = (grid.width(), grid.height());
    let mut buf = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            let p = Position::new(x, y);
            for c in [Channel::Agent, Channel::Goal, Channel::Obstacle].iter() {
                buf.push(if grid.is_set(p, *c) { 255 } else { 0 });
            }
        }
    }
    ImageBuffer::from_vec(w as u32, h as u32, buf)
        .ok_or_else(|| anyhow!("Frame buffer does not match {}x{}", w, h))
}

impl RoomsEnv {
    /// Writes the observations of the current episode to `dir` as
    /// `frame_00000.png`, `frame_00001.png`, ...
    ///
    /// Returns the number of written frames.
    pub fn save_frames(&self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        for (i, grid) in self.state_history().iter().enumerate() {
            let img = grid_to_image(grid)?;
            let (w, h) = img.dimensions();
            let img = resize(&img, w * CELL_PIXELS, h * CELL_PIXELS, Nearest);
            img.save(dir.join(format!("frame_{:05}.png", i)))?;
        }
        info!("Saved {} frames to {:?}", self.state_history().len(), dir);
        Ok(self.state_history().len())
    }
}
