//! Frame capture and GIF generation for search visualization

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::io::image::render_tiling;
use crate::spatial::Tile;
use image::{Delay, Frame};
use std::path::Path;

/// Captures intermediate tilings emitted by the generator
///
/// Keeps at most `max_frames` snapshots. When the limit is hit, every other
/// stored frame is dropped and the sampling stride doubles, so long runs are
/// thinned evenly instead of truncated.
pub struct VisualizationCapture {
    frames: Vec<Vec<Tile>>,
    width: i32,
    height: i32,
    cell_size: u32,
    max_frames: usize,
    stride: usize,
    seen: usize,
}

impl VisualizationCapture {
    /// Create an empty capture for a `width` x `height` grid
    pub fn new(width: i32, height: i32, cell_size: u32, max_frames: usize) -> Self {
        Self {
            frames: Vec::new(),
            width,
            height,
            cell_size,
            max_frames: max_frames.max(2),
            stride: 1,
            seen: 0,
        }
    }

    /// Offer one step's tiles; stored only if it falls on the sampling stride
    pub fn record_step(&mut self, tiles: &[Tile]) {
        let sampled = self.seen % self.stride == 0;
        self.seen += 1;
        if !sampled {
            return;
        }

        self.frames.push(tiles.to_vec());
        if self.frames.len() > self.max_frames {
            self.frames = std::mem::take(&mut self.frames)
                .into_iter()
                .step_by(2)
                .collect();
            self.stride *= 2;
        }
    }

    /// Always store the final tiling, unless it is already the last frame
    pub fn record_final(&mut self, tiles: &[Tile]) {
        if self.frames.last().is_some_and(|last| last.as_slice() == tiles) {
            return;
        }
        self.frames.push(tiles.to_vec());
    }

    /// Captured snapshots in step order
    pub fn frames(&self) -> &[Vec<Tile>] {
        &self.frames
    }

    /// Number of captured snapshots
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Steps offered so far, sampled or not
    pub const fn steps_seen(&self) -> usize {
        self.seen
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// If the requested delay is shorter than viewers reliably support, frames
    /// are skipped so the apparent speed is preserved. The final frame is held
    /// longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - A frame cannot be rendered
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &"empty",
                &"no steps were captured",
            ));
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.render_frames(effective_delay_ms, skip_factor)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| TilingError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| TilingError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn render_frames(&self, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let last_index = self.frames.len() - 1;
        let mut frames = Vec::with_capacity(self.frames.len() / skip_factor + 2);

        for (index, tiles) in self.frames.iter().enumerate() {
            let is_last = index == last_index;
            if index % skip_factor != 0 && !is_last {
                continue;
            }

            let img = render_tiling(self.width, self.height, tiles, self.cell_size)?;
            // Final frame displays longer for better visibility
            let delay = if is_last { delay_ms * 25 } else { delay_ms };
            frames.push(Frame::from_parts(
                img,
                0,
                0,
                Delay::from_numer_denom_ms(delay, 1),
            ));
        }

        Ok(frames)
    }
}
