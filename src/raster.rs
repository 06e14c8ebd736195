//! Software RGBA raster canvas — the stroke renderer.
//!
//! Strokes are rendered by sweeping a disc of half the stroke width along the
//! segment between the last committed point and the new one: every pixel
//! whose center lies within the disc radius of the segment is written. The
//! disc metric gives rounded caps and rounded joins without special cases.
//! Erasing sweeps a wider disc and writes transparent pixels (alpha punch)
//! so transparency underneath survives.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::color::Rgb;
use crate::surface::{DrawSurface, Point, Snapshot};

const BYTES_PER_PIXEL: usize = 4;

/// Errors produced when encoding or restoring raster content.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// The pixel buffer does not match the canvas dimensions.
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// PNG encoding failed.
    #[error("png encode failed: {0}")]
    Encode(String),
}

/// An in-memory RGBA8 canvas. Starts fully transparent.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self { width, height, pixels: vec![0; len] }
    }

    /// Read one pixel as RGBA channels. Out-of-bounds reads are transparent.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2], self.pixels[idx + 3]]
    }

    /// Encode the canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if the encoder rejects the buffer.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, RasterError> {
        let image = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            RasterError::BufferSize {
                expected: self.width as usize * self.height as usize * BYTES_PER_PIXEL,
                actual: self.pixels.len(),
            },
        )?;
        let mut bytes = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Sweep a disc of `radius` along `from`→`to`, writing `rgba` to every
    /// covered pixel.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sweep_segment(&mut self, from: Point, to: Point, radius: f64, rgba: [u8; 4]) {
        let min_x = (from.x.min(to.x) - radius).floor().max(0.0) as u32;
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0) as u32;
        let max_x = (from.x.max(to.x) + radius).ceil().min(f64::from(self.width) - 1.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(f64::from(self.height) - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }
        let (max_x, max_y) = (max_x as u32, max_y as u32);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if dist_to_segment(center, from, to) <= radius {
                    let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
                    self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
                }
            }
        }
    }
}

impl DrawSurface for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_segment(&mut self, from: Point, to: Point, color: Rgb, width: f64) {
        let (r, g, b) = color;
        self.sweep_segment(from, to, (width / 2.0).max(0.5), [r, g, b, 255]);
    }

    fn erase_segment(&mut self, from: Point, to: Point, width: f64) {
        self.sweep_segment(from, to, (width / 2.0).max(0.5), [0, 0, 0, 0]);
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn capture(&self) -> Snapshot {
        Snapshot { width: self.width, height: self.height, pixels: self.pixels.clone() }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width != self.width || snapshot.height != self.height || snapshot.pixels.len() != self.pixels.len()
        {
            tracing::warn!(
                snapshot_width = snapshot.width,
                snapshot_height = snapshot.height,
                "snapshot dimensions do not match canvas; skipping restore"
            );
            return;
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
    }
}

/// Distance from `p` to the closed segment `a`→`b`.
fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return (p.x - a.x).hypot(p.y - a.y);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    (p.x - cx).hypot(p.y - cy)
}

/// Milliseconds since the Unix epoch, saturating to zero on clock skew.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Filename for an exported drawing, timestamped in epoch milliseconds.
#[must_use]
pub fn export_filename(epoch_ms: i64) -> String {
    format!("air-canvas-{epoch_ms}.png")
}
